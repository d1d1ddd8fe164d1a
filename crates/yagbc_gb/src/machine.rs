mod gameboy;
mod memory;

pub use gameboy::GameBoy;
pub use memory::{Memory, MemoryError, MemoryRegion, HRAM_SIZE, OPEN_BUS, ROM_SIZE, WRAM_SIZE};
