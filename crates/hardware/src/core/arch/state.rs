//! CPU run state.

/// Whether the CPU is still executing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// `HLT` executed. Terminal; further steps do nothing.
    Halted,
}
