use thiserror::Error;

use crate::cpu::Bus;

/// Cartridge ROM window, 0x0000..=0x7FFF.
pub const ROM_SIZE: usize = 0x8000;
/// Work RAM, 0xC000..=0xDFFF.
pub const WRAM_SIZE: usize = 0x2000;
/// High RAM, 0xFF80..=0xFFFE.
pub const HRAM_SIZE: usize = 0x7F;

const WRAM_START: u16 = 0xC000;
const ECHO_START: u16 = 0xE000;
const HRAM_START: u16 = 0xFF80;

/// Value returned for reads that hit no backing store.
pub const OPEN_BUS: u8 = 0xFF;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    #[error("program too large for ROM: {len} bytes (max {capacity})")]
    ProgramTooLarge { len: usize, capacity: usize },
}

/// Result of decoding a 16-bit address. Offsets index into the region's
/// own backing array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryRegion {
    Rom(usize),
    WorkRam(usize),
    /// Echo of work RAM. The offset is already the work RAM index.
    EchoRam(usize),
    HighRam(usize),
    /// VRAM, cartridge RAM, OAM, IO and IE: not modelled.
    Unmapped,
}

impl MemoryRegion {
    pub fn decode(addr: u16) -> Self {
        match addr {
            0x0000..=0x7FFF => MemoryRegion::Rom(addr as usize),
            0xC000..=0xDFFF => MemoryRegion::WorkRam((addr - WRAM_START) as usize),
            // 0xE000..0xFDFF mirrors 0xC000..0xDDFF.
            0xE000..=0xFDFF => MemoryRegion::EchoRam((addr - ECHO_START) as usize),
            0xFF80..=0xFFFE => MemoryRegion::HighRam((addr - HRAM_START) as usize),
            _ => MemoryRegion::Unmapped,
        }
    }
}

/// Flat Game Boy memory with ROM, work RAM (plus its echo) and high RAM.
///
/// Everything else reads as `0xFF` and drops writes. ROM is writable: that
/// is how programs are loaded, there is no banking controller behind it.
#[derive(Clone)]
pub struct Memory {
    rom: Box<[u8; ROM_SIZE]>,
    wram: Box<[u8; WRAM_SIZE]>,
    hram: [u8; HRAM_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// All regions start zero-filled.
    pub fn new() -> Self {
        Self {
            rom: Box::new([0; ROM_SIZE]),
            wram: Box::new([0; WRAM_SIZE]),
            hram: [0; HRAM_SIZE],
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        match MemoryRegion::decode(addr) {
            MemoryRegion::Rom(offset) => self.rom[offset],
            MemoryRegion::WorkRam(offset) | MemoryRegion::EchoRam(offset) => self.wram[offset],
            MemoryRegion::HighRam(offset) => self.hram[offset],
            MemoryRegion::Unmapped => OPEN_BUS,
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match MemoryRegion::decode(addr) {
            MemoryRegion::Rom(offset) => self.rom[offset] = value,
            MemoryRegion::WorkRam(offset) | MemoryRegion::EchoRam(offset) => {
                self.wram[offset] = value
            }
            MemoryRegion::HighRam(offset) => self.hram[offset] = value,
            MemoryRegion::Unmapped => {}
        }
    }

    /// Copy `program` into ROM starting at 0x0000.
    ///
    /// ROM bytes past the end of `program` keep their previous contents.
    /// Oversized input is rejected before anything is written.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), MemoryError> {
        if program.len() > ROM_SIZE {
            return Err(MemoryError::ProgramTooLarge {
                len: program.len(),
                capacity: ROM_SIZE,
            });
        }

        self.rom[..program.len()].copy_from_slice(program);
        log::debug!("loaded {} byte program into ROM", program.len());
        Ok(())
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }
}
