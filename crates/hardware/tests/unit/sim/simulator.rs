//! # Simulator Tests
//!
//! Bounded runs and configuration plumbing.

use ls8_core::config::Config;
use ls8_core::soc::CaptureReporter;
use ls8_core::{RunOutcome, SimError, Simulator};
use pretty_assertions::assert_eq;

const PRINT8: &str = "10000010\n00000000\n00001000\n01000111\n00000000\n00000001\n";

/// `LDI R0,0; JMP R0`
const SPIN: &str = "10000010\n00000000\n00000000\n01010100\n00000000\n";

#[test]
fn halted_run_counts_steps() {
    let mut sim = Simulator::from_source(PRINT8, CaptureReporter::new(), &Config::default()).unwrap();
    assert_eq!(sim.run().unwrap(), RunOutcome::Halted { steps: 3 });
    assert_eq!(sim.cpu.reporter.text(), "8\n");
}

#[test]
fn step_limit_stops_spinning_program() {
    let mut config = Config::default();
    config.general.max_steps = Some(10);
    let mut sim = Simulator::from_source(SPIN, CaptureReporter::new(), &config).unwrap();
    assert_eq!(sim.run().unwrap(), RunOutcome::StepLimit { steps: 10 });
    assert!(!sim.cpu.is_halted());
    assert_eq!(sim.cpu.stats.instructions_retired, 10);
}

#[test]
fn limit_can_be_changed_between_runs() {
    let mut sim = Simulator::from_source(PRINT8, CaptureReporter::new(), &Config::default()).unwrap();
    sim.set_max_steps(Some(1));
    assert_eq!(sim.run().unwrap(), RunOutcome::StepLimit { steps: 1 });
    sim.set_max_steps(None);
    assert_eq!(sim.run().unwrap(), RunOutcome::Halted { steps: 2 });
}

#[test]
fn already_halted_run_executes_nothing() {
    let mut sim = Simulator::from_source(PRINT8, CaptureReporter::new(), &Config::default()).unwrap();
    let _ = sim.run().unwrap();
    assert_eq!(sim.run().unwrap(), RunOutcome::Halted { steps: 0 });
}

#[test]
fn stack_seed_comes_from_config() {
    let config = Config::from_json(r#"{ "system": { "stack_seed": 128 } }"#).unwrap();
    let sim = Simulator::from_source(PRINT8, CaptureReporter::new(), &config).unwrap();
    assert_eq!(sim.cpu.sp, 128);
    assert_eq!(sim.cpu.get_register(7).unwrap(), 128);
}

#[test]
fn malformed_source_is_rejected() {
    let err = Simulator::from_source("2\n", CaptureReporter::new(), &Config::default()).unwrap_err();
    assert!(matches!(err, SimError::MalformedProgram { line: 1, .. }));
}

#[test]
fn fatal_fault_surfaces_from_run() {
    let mut sim = Simulator::from_source("11111111\n", CaptureReporter::new(), &Config::default()).unwrap();
    assert!(matches!(sim.run(), Err(SimError::IllegalOpcode { pc: 0, .. })));
}
