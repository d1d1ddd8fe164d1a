mod alu;
mod control;
mod ld;

pub(super) use alu::op_add_a_b;
pub(super) use control::{op_jp_nn, op_nop, op_unknown};
pub(super) use ld::{op_ld_a_b, op_ld_a_c, op_ld_a_n, op_ld_b_n, op_ld_c_n};
