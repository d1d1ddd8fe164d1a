use crate::cpu::ExecContext;

// LD r, d8. No flags affected.

pub(in crate::cpu) fn op_ld_a_n(ctx: &mut ExecContext<'_>) {
    ctx.regs.a = ctx.fetch8();
}

pub(in crate::cpu) fn op_ld_b_n(ctx: &mut ExecContext<'_>) {
    ctx.regs.b = ctx.fetch8();
}

pub(in crate::cpu) fn op_ld_c_n(ctx: &mut ExecContext<'_>) {
    ctx.regs.c = ctx.fetch8();
}

// LD A, r. The source register keeps its value.

pub(in crate::cpu) fn op_ld_a_b(ctx: &mut ExecContext<'_>) {
    ctx.regs.a = ctx.regs.b;
}

pub(in crate::cpu) fn op_ld_a_c(ctx: &mut ExecContext<'_>) {
    ctx.regs.a = ctx.regs.c;
}
