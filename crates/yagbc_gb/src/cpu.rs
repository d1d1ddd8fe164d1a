mod bus;
mod exec;
mod init;
mod opcodes;
mod regs;

pub use bus::Bus;
pub use init::{CpuConfig, PowerOnState, UnknownOpcodePolicy};
pub use opcodes::{lookup, ExecContext, Handler, Opcode};
pub use regs::{Flags, Registers, F_MASK};

/// Cycle cost reported for a step taken while halted.
pub const HALTED_STEP_CYCLES: u32 = 4;

/// Execution state of the core.
///
/// No instruction moves the core into `Halted` yet; the state exists so a
/// future HALT implementation (or tooling) has somewhere to put it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CpuState {
    #[default]
    Running,
    Halted,
}

/// An unassigned opcode fetched under `UnknownOpcodePolicy::Report`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownOpcode {
    /// Address the opcode byte was fetched from.
    pub pc: u16,
    pub opcode: u8,
}

/// Sharp SM83 instruction core bound to one address space.
///
/// The core owns its register file and its bus for its whole lifetime.
/// `step` runs exactly one instruction through the 256-entry opcode table.
pub struct Cpu<B: Bus> {
    pub regs: Registers,
    bus: B,
    config: CpuConfig,
    state: CpuState,
    /// Sum of the cycle costs of every executed instruction since
    /// construction or reset. Halted steps are not counted.
    /// Statistics only.
    total_cycles: u64,
    unknown_opcodes: u64,
    last_unknown_opcode: Option<UnknownOpcode>,
}

impl<B: Bus> Cpu<B> {
    /// Execute a single instruction and return the number of cycles taken.
    pub fn step(&mut self) -> u32 {
        if self.state == CpuState::Halted {
            // Idle: no fetch, no bus tick, no cycle accounting.
            return HALTED_STEP_CYCLES;
        }

        let cycles = self.execute_next();
        self.total_cycles += u64::from(cycles);
        self.bus.tick(cycles);
        cycles
    }

    fn execute_next(&mut self) -> u32 {
        let pc = self.regs.pc;
        let opcode = self.bus.read8(pc);
        self.regs.pc = pc.wrapping_add(1);

        let op = lookup(opcode);
        if !op.known {
            self.on_unknown_opcode(pc, opcode);
        }

        (op.handler)(&mut ExecContext::new(&mut self.regs, &mut self.bus));

        log::trace!(
            "PC=0x{pc:04X} op=0x{opcode:02X} {op} ({cycles} cycles)",
            cycles = op.cycles
        );
        op.cycles
    }

    fn on_unknown_opcode(&mut self, pc: u16, opcode: u8) {
        if self.config.unknown_opcode != UnknownOpcodePolicy::Report {
            return;
        }

        log::warn!(
            "unknown opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.unknown_opcodes += 1;
        self.last_unknown_opcode = Some(UnknownOpcode { pc, opcode });
    }

    #[inline]
    pub fn state(&self) -> CpuState {
        self.state
    }

    /// Force the execution state. Intended for tooling and tests.
    pub fn set_state(&mut self, state: CpuState) {
        self.state = state;
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    #[inline]
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    #[inline]
    pub fn config(&self) -> CpuConfig {
        self.config
    }

    /// Number of unknown opcodes reported since construction or reset.
    /// Always zero under `UnknownOpcodePolicy::Ignore`.
    #[inline]
    pub fn unknown_opcodes(&self) -> u64 {
        self.unknown_opcodes
    }

    #[inline]
    pub fn last_unknown_opcode(&self) -> Option<UnknownOpcode> {
        self.last_unknown_opcode
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.set_flag(flag, value);
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
