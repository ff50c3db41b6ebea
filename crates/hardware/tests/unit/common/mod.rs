pub mod register_indexing;
