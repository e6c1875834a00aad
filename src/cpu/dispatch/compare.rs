/*!
compare.rs - CMP, CPX, CPY.

Each compares a register to a memory operand by computing `register - value`
without storing the result: C is set when `register >= value`, Z/N come from
the 8-bit difference.
*/

use crate::cpu::state::CpuState;

fn compare(state: &mut CpuState, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    state.p.carry = register >= value;
    state.p.set_zn(result);
}

pub fn cmp(state: &mut CpuState, value: u8) {
    compare(state, state.a, value);
}

pub fn cpx(state: &mut CpuState, value: u8) {
    compare(state, state.x, value);
}

pub fn cpy(state: &mut CpuState, value: u8) {
    compare(state, state.y, value);
}
