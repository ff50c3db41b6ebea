//! # Unit Components
//!
//! This module serves as the central hub for the tests of each emulator
//! component: shared types, the processor core, the ISA and simulation helpers.

/// Unit tests for shared types (errors, register file).
pub mod common;

/// Unit tests for configuration parsing and defaults.
pub mod config;


/// Unit tests for opcode encoding, decoding and disassembly.
pub mod isa;
