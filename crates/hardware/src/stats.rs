//! Execution statistics collection and reporting.
//!
//! Tracks how many instructions of each class retired, how many branches were
//! taken, and how many faults the engine recovered from.

use std::time::Instant;

use crate::isa::InstructionClass;

/// Execution statistics for one run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total instructions executed.
    pub instructions_retired: u64,

    /// ALU instructions retired.
    pub inst_alu: u64,
    /// `PUSH`/`POP` retired.
    pub inst_stack: u64,
    /// Jumps, `CALL` and `RET` retired.
    pub inst_branch: u64,
    /// `LDI`, `LD` and `ST` retired.
    pub inst_load_store: u64,
    /// `PRN`/`PRA` retired.
    pub inst_io: u64,
    /// `NOP`/`HLT` retired.
    pub inst_system: u64,

    /// Branches that changed the PC (unconditional ones included).
    pub branches_taken: u64,
    /// Faults recovered without stopping (division by zero).
    pub recovered_faults: u64,
}

impl SimStats {
    /// Creates zeroed statistics, starting the wall clock now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_load_store: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
            recovered_faults: 0,
        }
    }

    /// Counts one retired instruction of `class`.
    #[inline]
    pub fn retire(&mut self, class: InstructionClass) {
        self.instructions_retired += 1;
        let counter = match class {
            InstructionClass::Alu => &mut self.inst_alu,
            InstructionClass::Stack => &mut self.inst_stack,
            InstructionClass::Branch => &mut self.inst_branch,
            InstructionClass::LoadStore => &mut self.inst_load_store,
            InstructionClass::Io => &mut self.inst_io,
            InstructionClass::System => &mut self.inst_system,
        };
        *counter += 1;
    }

    /// Prints a summary to stderr.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed();
        eprintln!("==========================================================");
        eprintln!("LS-8 EXECUTION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {:.6} s", elapsed.as_secs_f64());
        eprintln!("sim_insts                {}", self.instructions_retired);
        eprintln!("----------------------------------------------------------");
        self.print_class("alu", self.inst_alu);
        self.print_class("stack", self.inst_stack);
        self.print_class("branch", self.inst_branch);
        self.print_class("load/store", self.inst_load_store);
        self.print_class("io", self.inst_io);
        self.print_class("system", self.inst_system);
        eprintln!("----------------------------------------------------------");
        eprintln!("branches_taken           {}", self.branches_taken);
        eprintln!("recovered_faults         {}", self.recovered_faults);
    }

    fn print_class(&self, name: &str, count: u64) {
        let pct = if self.instructions_retired == 0 {
            0.0
        } else {
            count as f64 / self.instructions_retired as f64 * 100.0
        };
        eprintln!("  op.{name:<21}{count} ({pct:.2}%)");
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}
