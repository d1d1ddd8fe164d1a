use std::fmt;

use lazy_static::lazy_static;

use super::exec;
use super::{Bus, Registers};

/// Execution context handed to an opcode handler.
///
/// Handlers see the register file and can pull operand bytes from the
/// instruction stream, nothing else. Operand fetches always go through
/// `fetch8`/`fetch16` so that PC ends one past the full instruction.
pub struct ExecContext<'a> {
    pub regs: &'a mut Registers,
    bus: &'a mut dyn Bus,
}

impl<'a> ExecContext<'a> {
    pub(crate) fn new(regs: &'a mut Registers, bus: &'a mut dyn Bus) -> Self {
        Self { regs, bus }
    }

    /// Read the byte at PC and advance PC by one.
    #[inline]
    pub fn fetch8(&mut self) -> u8 {
        let value = self.bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Read a little-endian word at PC (low byte first) and advance PC by two.
    #[inline]
    pub fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8() as u16;
        let hi = self.fetch8() as u16;
        (hi << 8) | lo
    }
}

pub type Handler = fn(&mut ExecContext<'_>);

/// Static description of one opcode.
#[derive(Clone)]
pub struct Opcode {
    pub mnemonic: String,
    /// Total length in bytes, opcode included.
    pub length: u8,
    pub cycles: u32,
    pub handler: Handler,
    /// False for the filler entries of unassigned opcodes.
    pub known: bool,
}

impl Opcode {
    fn new(mnemonic: &str, length: u8, cycles: u32, handler: Handler) -> Self {
        Self {
            mnemonic: mnemonic.to_string(),
            length,
            cycles,
            handler,
            known: true,
        }
    }

    fn unknown(opcode: u8) -> Self {
        Self {
            mnemonic: format!("UNKNOWN_0x{opcode:02X}"),
            length: 1,
            cycles: 4,
            handler: exec::op_unknown,
            known: false,
        }
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opcode")
            .field("mnemonic", &self.mnemonic)
            .field("length", &self.length)
            .field("cycles", &self.cycles)
            .field("known", &self.known)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic)
    }
}

lazy_static! {
    static ref OPCODE_TABLE: [Opcode; 256] = build_table();
}

fn build_table() -> [Opcode; 256] {
    let mut table: [Opcode; 256] = std::array::from_fn(|i| Opcode::unknown(i as u8));

    table[0x00] = Opcode::new("NOP", 1, 4, exec::op_nop);

    // LD r, d8
    table[0x06] = Opcode::new("LD B, n", 2, 8, exec::op_ld_b_n);
    table[0x0E] = Opcode::new("LD C, n", 2, 8, exec::op_ld_c_n);
    table[0x3E] = Opcode::new("LD A, n", 2, 8, exec::op_ld_a_n);

    // LD A, r
    table[0x78] = Opcode::new("LD A, B", 1, 4, exec::op_ld_a_b);
    table[0x79] = Opcode::new("LD A, C", 1, 4, exec::op_ld_a_c);

    table[0x80] = Opcode::new("ADD A, B", 1, 4, exec::op_add_a_b);

    table[0xC3] = Opcode::new("JP nn", 3, 16, exec::op_jp_nn);

    table
}

/// Descriptor for `opcode`. Every byte value has one.
#[inline]
pub fn lookup(opcode: u8) -> &'static Opcode {
    &OPCODE_TABLE[opcode as usize]
}
