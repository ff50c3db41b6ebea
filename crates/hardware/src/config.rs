//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a run:
//! 1. **Defaults:** Reset values for the machine.
//! 2. **General:** Tracing and the optional step limit.
//! 3. **System:** Machine-level reset state such as the stack seed.
//!
//! Configuration is deserialized from JSON (every field may be omitted) or
//! built with `Config::default()`.

use serde::Deserialize;

use crate::common::error::Result;

/// Default configuration constants.
mod defaults {
    /// Reset value of `R7` and the stack pointer.
    pub const STACK_SEED: u8 = crate::common::constants::STACK_SEED;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Tracing and run limits.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine reset state.
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`](crate::common::SimError::Config) if the document is not valid configuration JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event with disassembly and registers for every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop after this many instructions even if the program has not halted.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Machine reset state.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Initial value of `R7` and of the stack pointer.
    #[serde(default = "SystemConfig::default_stack_seed")]
    pub stack_seed: u8,
}

impl SystemConfig {
    /// Returns the default stack seed.
    fn default_stack_seed() -> u8 {
        defaults::STACK_SEED
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            stack_seed: defaults::STACK_SEED,
        }
    }
}
