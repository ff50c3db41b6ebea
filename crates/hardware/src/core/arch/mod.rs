//! Architectural state that is not memory or the register file.

/// The comparison flag.
pub mod flags;

/// Run state of the CPU.
pub mod state;

pub use flags::Flag;
pub use state::RunState;
