pub mod cpu;
pub mod machine;

pub use cpu::{Cpu, CpuConfig, CpuState, Flags, PowerOnState, Registers, UnknownOpcodePolicy};
pub use machine::{GameBoy, Memory, MemoryError};
