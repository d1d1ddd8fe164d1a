use crate::cpu::ExecContext;

pub(in crate::cpu) fn op_nop(_ctx: &mut ExecContext<'_>) {}

/// Filler for every opcode without assigned behaviour.
///
/// Reporting, when enabled, happens in `Cpu::step`; the handler itself has
/// no architectural effect.
pub(in crate::cpu) fn op_unknown(_ctx: &mut ExecContext<'_>) {}

/// JP a16: absolute, unconditional. No flags affected.
pub(in crate::cpu) fn op_jp_nn(ctx: &mut ExecContext<'_>) {
    let addr = ctx.fetch16();
    ctx.regs.pc = addr;
}
