//! Main Memory (RAM).
//!
//! The LS-8 has a single flat 256-byte address space holding the program, its
//! data and the stack. Every access is bounds-checked and reported through
//! [`SimError::OutOfRange`] rather than a panic.

use std::fmt;

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::{RangeKind, Result, SimError};

/// Byte-addressable RAM.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates zero-filled memory.
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRange`] if `addr` is not below 256.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8> {
        self.cells
            .get(addr)
            .copied()
            .ok_or_else(|| SimError::out_of_range(RangeKind::Memory, addr))
    }

    /// Writes `val` at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRange`] if `addr` is not below 256.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<()> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or_else(|| SimError::out_of_range(RangeKind::Memory, addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// The whole slice is checked before anything is written, so a failed load
    /// leaves memory untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ProgramTooLarge`] if the slice does not fit.
    pub fn load(&mut self, data: &[u8], offset: usize) -> Result<()> {
        let end = offset
            .checked_add(data.len())
            .filter(|&end| end <= MEMORY_SIZE)
            .ok_or(SimError::ProgramTooLarge { len: data.len() })?;
        self.cells[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Returns the raw contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    /// Prints a hex dump, sixteen bytes per row, skipping all-zero rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Memory {{")?;
        for (row, chunk) in self.cells.chunks(16).enumerate() {
            if chunk.iter().all(|&b| b == 0) {
                continue;
            }
            write!(f, "    {:02X}:", row * 16)?;
            for byte in chunk {
                write!(f, " {byte:02X}")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
