//! Functional units of the LS-8 core.

/// Arithmetic logic unit.
pub mod alu;
