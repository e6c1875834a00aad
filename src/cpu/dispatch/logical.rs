/*!
logical.rs - AND, ORA, EOR, BIT.

AND/ORA/EOR fold into A and set Z/N from the result. BIT leaves A alone:
Z comes from `A & value`, N and V are copied straight from bits 7 and 6 of
the memory operand itself.
*/

use crate::cpu::state::CpuState;

pub fn and(state: &mut CpuState, value: u8) {
    state.a &= value;
    state.p.set_zn(state.a);
}

pub fn ora(state: &mut CpuState, value: u8) {
    state.a |= value;
    state.p.set_zn(state.a);
}

pub fn eor(state: &mut CpuState, value: u8) {
    state.a ^= value;
    state.p.set_zn(state.a);
}

pub fn bit(state: &mut CpuState, value: u8) {
    state.p.zero = (state.a & value) == 0;
    state.p.negative = (value >> 7) & 1 != 0;
    state.p.overflow = (value >> 6) & 1 != 0;
}
