use crate::cpu::{ExecContext, Flags, Registers};

impl Registers {
    /// Core 8-bit ADD on A.
    ///
    /// Z is set from the wrapped result, N is cleared, H reports a carry out
    /// of bit 3 and C a carry out of bit 7. All four flags are written.
    pub(crate) fn alu_add(&mut self, value: u8) {
        let a = self.a;
        let half = (a & 0x0F) + (value & 0x0F);
        let full = (a as u16) + (value as u16);
        let result = full as u8;

        self.a = result;

        let mut flags = Flags::empty();
        flags.set(Flags::Z, result == 0);
        flags.set(Flags::H, half > 0x0F);
        flags.set(Flags::C, full > 0xFF);
        self.set_flags(flags);
    }
}

pub(in crate::cpu) fn op_add_a_b(ctx: &mut ExecContext<'_>) {
    let b = ctx.regs.b;
    ctx.regs.alu_add(b);
}
