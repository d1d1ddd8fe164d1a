use crate::cpu::{Cpu, CpuConfig};

use super::{Memory, MemoryError};

/// High-level Game Boy machine.
///
/// Holds the CPU core bound to its memory. There is no PPU, APU, timer or
/// interrupt controller yet, so a machine step is just a CPU step.
pub struct GameBoy {
    cpu: Cpu<Memory>,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            cpu: Cpu::with_config(Memory::new(), config),
        }
    }

    /// Load a program image into the cartridge ROM area.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), MemoryError> {
        self.cpu.bus_mut().load_program(program)
    }

    /// Execute one instruction and return its cycle cost.
    pub fn step(&mut self) -> u32 {
        self.cpu.step()
    }

    /// Step until at least `budget` cycles have elapsed.
    ///
    /// Returns the number of cycles actually run, which overshoots `budget`
    /// by less than one instruction.
    pub fn run_cycles(&mut self, budget: u64) -> u64 {
        let mut elapsed = 0u64;
        while elapsed < budget {
            elapsed += u64::from(self.cpu.step());
        }
        elapsed
    }

    /// Reset the CPU. Memory, and with it the loaded program, is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    pub fn cpu(&self) -> &Cpu<Memory> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu<Memory> {
        &mut self.cpu
    }

    pub fn memory(&self) -> &Memory {
        self.cpu.bus()
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        self.cpu.bus_mut()
    }
}
