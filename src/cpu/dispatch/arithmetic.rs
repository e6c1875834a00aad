/*!
arithmetic.rs - ADC and SBC.

ADC sums A, the operand, and the carry-in, then sets C from bit 8 of the
16-bit sum and V from the signed-overflow formula (operands share a sign but
the result's sign differs). SBC is ADC with the operand's bits inverted —
`A - M - (1 - C)` and `A + ~M + C` are the same sum, so no separate overflow
or borrow logic is needed. This is the standard, non-buggy relationship
(unlike the source this system was distilled from, which computed SBC via
two's-complement negation and got carry-out backwards).
*/

use crate::cpu::state::CpuState;

pub fn adc(state: &mut CpuState, value: u8) {
    let a = state.a as u16;
    let v = value as u16;
    let carry_in = state.p.carry as u16;
    let sum = a + v + carry_in;

    state.p.carry = sum > 0xFF;
    let result = sum as u8;
    state.p.overflow = (!(state.a ^ value) & (state.a ^ result) & 0x80) != 0;
    state.a = result;
    state.p.set_zn(state.a);
}

pub fn sbc(state: &mut CpuState, value: u8) {
    adc(state, !value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adc_basic_sum_sets_carry_on_overflow() {
        let mut state = CpuState::default();
        state.a = 0xFF;
        state.p.carry = false;
        adc(&mut state, 0x01);
        assert_eq!(state.a, 0x00);
        assert!(state.p.carry);
        assert!(state.p.zero);
    }

    #[test]
    fn adc_sets_overflow_on_signed_overflow() {
        let mut state = CpuState::default();
        state.a = 0x7F; // +127
        state.p.carry = false;
        adc(&mut state, 0x01); // +1 -> should overflow into negative
        assert_eq!(state.a, 0x80);
        assert!(state.p.overflow);
        assert!(state.p.negative);
    }

    #[test]
    fn sbc_without_borrow() {
        let mut state = CpuState::default();
        state.a = 0x05;
        state.p.carry = true; // no borrow
        sbc(&mut state, 0x03);
        assert_eq!(state.a, 0x02);
        assert!(state.p.carry);
        assert!(!state.p.overflow);
    }

    #[test]
    fn sbc_with_borrow_clears_carry() {
        let mut state = CpuState::default();
        state.a = 0x00;
        state.p.carry = true;
        sbc(&mut state, 0x01);
        assert_eq!(state.a, 0xFF);
        assert!(!state.p.carry);
    }
}
