use typed_builder::TypedBuilder;

use super::{Bus, Cpu, CpuState, Registers};

/// Register file the core starts from on construction and on `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerOnState {
    /// Every 8-bit register cleared, SP=0xFFFE, PC=0x0000.
    ///
    /// This is not what real hardware hands to a cartridge; it is the
    /// simplest state for running hand-assembled programs loaded at 0x0000.
    #[default]
    Zeroed,
    /// Values left behind by the DMG boot ROM when it jumps to 0x0100.
    PostBootDmg,
}

impl PowerOnState {
    pub fn registers(self) -> Registers {
        let mut regs = Registers::default();
        regs.sp = 0xFFFE;
        if self == PowerOnState::PostBootDmg {
            regs.pc = 0x0100;
            regs.set_af(0x01B0);
            regs.set_bc(0x0013);
            regs.set_de(0x00D8);
            regs.set_hl(0x014D);
        }
        regs
    }
}

/// What the core does when it fetches an opcode with no assigned behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownOpcodePolicy {
    /// Execute it as a 1-byte, 4-cycle no-op.
    #[default]
    Ignore,
    /// Same architectural effect as `Ignore`, but every occurrence is
    /// logged at `warn` level and counted.
    Report,
}

/// Behavioural choices for a `Cpu` instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default)]
    pub power_on: PowerOnState,
    #[builder(default)]
    pub unknown_opcode: UnknownOpcodePolicy,
}

impl<B: Bus> Cpu<B> {
    /// Bind a new core to `bus` with the default configuration.
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, CpuConfig::default())
    }

    pub fn with_config(bus: B, config: CpuConfig) -> Self {
        Self {
            regs: config.power_on.registers(),
            bus,
            config,
            state: CpuState::Running,
            total_cycles: 0,
            unknown_opcodes: 0,
            last_unknown_opcode: None,
        }
    }

    /// Reset the core to its configured power-on state.
    ///
    /// The bus is left untouched, so a loaded program survives a reset.
    pub fn reset(&mut self) {
        self.regs = self.config.power_on.registers();
        self.state = CpuState::Running;
        self.total_cycles = 0;
        self.unknown_opcodes = 0;
        self.last_unknown_opcode = None;
    }
}
