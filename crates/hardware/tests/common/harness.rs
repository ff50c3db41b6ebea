use ls8_core::common::Result;
use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::isa::opcodes as op;
use ls8_core::sim::loader;
use ls8_core::soc::CaptureReporter;

pub struct TestContext {
    pub cpu: Cpu<CaptureReporter>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        Self {
            cpu: Cpu::with_config(CaptureReporter::new(), config),
        }
    }

    /// Load raw program bytes at address 0.
    pub fn load_program(mut self, program: &[u8]) -> Self {
        self.cpu.load(program).expect("program fits in memory");
        self
    }

    /// Parse and load a textual program image.
    pub fn load_source(self, source: &str) -> Self {
        let program = loader::parse_program(source).expect("program parses");
        self.load_program(&program)
    }

    pub fn set_reg(&mut self, reg: usize, val: u8) {
        self.cpu.set_register(reg, val).expect("valid register");
    }

    pub fn get_reg(&self, reg: usize) -> u8 {
        self.cpu.get_register(reg).expect("valid register")
    }

    /// Run until `HLT` or the first fatal fault.
    pub fn run(&mut self) -> Result<()> {
        self.cpu.run()
    }

    /// Execute at most `steps` instructions, stopping early on halt.
    pub fn step_n(&mut self, steps: usize) -> Result<()> {
        for _ in 0..steps {
            if self.cpu.is_halted() {
                break;
            }
            let _ = self.cpu.step()?;
        }
        Ok(())
    }

    pub fn output(&self) -> &str {
        self.cpu.reporter.text()
    }
}

/// Assembles `LDI reg, value`.
pub fn ldi(reg: u8, value: u8) -> [u8; 3] {
    [op::LDI, reg, value]
}

/// Assembles any two-register instruction.
pub fn rr(opcode: u8, a: u8, b: u8) -> [u8; 3] {
    [opcode, a, b]
}

/// Assembles any one-register instruction.
pub fn r(opcode: u8, a: u8) -> [u8; 2] {
    [opcode, a]
}

/// Concatenates instruction fragments into one image.
pub fn program(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}
