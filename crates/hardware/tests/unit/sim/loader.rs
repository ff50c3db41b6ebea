//! # Program Loader Tests
//!
//! Parsing textual program images from strings and files.

use ls8_core::SimError;
use ls8_core::sim::loader::{load_program_file, parse_program};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;

const MULT: &str = "\
# mult.ls8
10000010 # LDI R0,8
00000000
00001000
10000010 # LDI R1,9
00000001
00001001
10100010 # MUL R0,R1
00000000
00000001
01000111 # PRN R0
00000000
00000001 # HLT
";

#[test]
fn parses_mult_program() {
    assert_eq!(
        parse_program(MULT).unwrap(),
        vec![0x82, 0, 8, 0x82, 1, 9, 0xA2, 0, 1, 0x47, 0, 1]
    );
}

#[test]
fn empty_source_is_empty_program() {
    assert!(parse_program("").unwrap().is_empty());
    assert!(parse_program("# only a comment\n\n   \n").unwrap().is_empty());
}

#[test]
fn crlf_line_endings() {
    assert_eq!(parse_program("00000001\r\n00000010\r\n").unwrap(), vec![1, 2]);
}

#[rstest]
#[case("10000010\nabc\n", 2, "abc")]
#[case("\n\n12\n", 3, "12")]
#[case("00000001 # ok\n111111111 # nine bits\n", 2, "111111111")]
fn malformed_lines_report_position(
    #[case] source: &str,
    #[case] line: usize,
    #[case] text: &str,
) {
    match parse_program(source) {
        Err(SimError::MalformedProgram { line: l, text: t }) => {
            assert_eq!(l, line);
            assert_eq!(t, text);
        }
        other => panic!("expected MalformedProgram, got {other:?}"),
    }
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MULT.as_bytes()).unwrap();
    let program = load_program_file(file.path()).unwrap();
    assert_eq!(program.len(), 12);
    assert_eq!(program[6], 0xA2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_program_file(dir.path().join("missing.ls8")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}
