//! Program image loader.
//!
//! LS-8 programs are distributed as text: one 8-bit binary literal per line,
//! with `#` starting a comment that runs to the end of the line. Blank and
//! comment-only lines are skipped.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::{Result, SimError};

/// Comment delimiter.
const COMMENT: char = '#';

/// Parses a textual program image into bytes.
///
/// # Errors
///
/// Returns [`SimError::MalformedProgram`] naming the first line that is not a
/// binary literal of at most eight significant bits.
pub fn parse_program(source: &str) -> Result<Vec<u8>> {
    let mut program = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let text = raw.split(COMMENT).next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        program.push(parse_byte(text).ok_or_else(|| SimError::MalformedProgram {
            line: idx + 1,
            text: text.to_string(),
        })?);
    }
    Ok(program)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or
/// [`SimError::MalformedProgram`] if it does not parse.
pub fn load_program_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let program = parse_program(&source)?;
    debug!(path = %path.display(), bytes = program.len(), "program image parsed");
    Ok(program)
}

/// Parses one binary literal; `None` unless it is only `0`/`1` and fits a byte.
fn parse_byte(text: &str) -> Option<u8> {
    if !text.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(text, 2).ok()
}
