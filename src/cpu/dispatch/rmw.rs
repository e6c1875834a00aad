/*!
rmw.rs - shifts/rotates (ASL, LSR, ROL, ROR), INC/DEC on memory, and the
register increments/decrements (INX, INY, DEX, DEY).

Shift/rotate carry-out always comes from the bit shifted *out* of the input,
never from the result (the source this was distilled from set ROL/ROR's
carry from the output instead, which this crate does not reproduce). INX/INY
update Z/N the same as every other register mutation — the original source
left them out; here they don't.
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;

fn asl(state: &mut CpuState, value: u8) -> u8 {
    state.p.carry = (value >> 7) & 1 != 0;
    let result = value << 1;
    state.p.set_zn(result);
    result
}

fn lsr(state: &mut CpuState, value: u8) -> u8 {
    state.p.carry = value & 1 != 0;
    let result = value >> 1;
    state.p.set_zn(result);
    result
}

fn rol(state: &mut CpuState, value: u8) -> u8 {
    let carry_in = state.p.carry as u8;
    state.p.carry = (value >> 7) & 1 != 0;
    let result = (value << 1) | carry_in;
    state.p.set_zn(result);
    result
}

fn ror(state: &mut CpuState, value: u8) -> u8 {
    let carry_in = state.p.carry as u8;
    state.p.carry = value & 1 != 0;
    let result = (value >> 1) | (carry_in << 7);
    state.p.set_zn(result);
    result
}

pub fn asl_acc(state: &mut CpuState) {
    state.a = asl(state, state.a);
}

pub fn lsr_acc(state: &mut CpuState) {
    state.a = lsr(state, state.a);
}

pub fn rol_acc(state: &mut CpuState) {
    state.a = rol(state, state.a);
}

pub fn ror_acc(state: &mut CpuState) {
    state.a = ror(state, state.a);
}

pub fn asl_mem(state: &mut CpuState, bus: &mut Bus, address: u16, value: u8) {
    bus.write8(address, asl(state, value));
}

pub fn lsr_mem(state: &mut CpuState, bus: &mut Bus, address: u16, value: u8) {
    bus.write8(address, lsr(state, value));
}

pub fn rol_mem(state: &mut CpuState, bus: &mut Bus, address: u16, value: u8) {
    bus.write8(address, rol(state, value));
}

pub fn ror_mem(state: &mut CpuState, bus: &mut Bus, address: u16, value: u8) {
    bus.write8(address, ror(state, value));
}

pub fn inc_mem(state: &mut CpuState, bus: &mut Bus, address: u16, value: u8) {
    let result = value.wrapping_add(1);
    state.p.set_zn(result);
    bus.write8(address, result);
}

pub fn dec_mem(state: &mut CpuState, bus: &mut Bus, address: u16, value: u8) {
    let result = value.wrapping_sub(1);
    state.p.set_zn(result);
    bus.write8(address, result);
}

pub fn inx(state: &mut CpuState) {
    state.x = state.x.wrapping_add(1);
    state.p.set_zn(state.x);
}

pub fn iny(state: &mut CpuState) {
    state.y = state.y.wrapping_add(1);
    state.p.set_zn(state.y);
}

pub fn dex(state: &mut CpuState) {
    state.x = state.x.wrapping_sub(1);
    state.p.set_zn(state.x);
}

pub fn dey(state: &mut CpuState) {
    state.y = state.y.wrapping_sub(1);
    state.p.set_zn(state.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;
    use crate::test_utils::build_nrom_with_prg;

    fn bus_with_prg() -> Bus {
        let bytes = build_nrom_with_prg(&[]);
        Bus::new(Cartridge::from_ines_bytes(&bytes).unwrap())
    }

    #[test]
    fn asl_carry_from_input_bit7() {
        let mut state = CpuState::default();
        state.a = 0x80;
        asl_acc(&mut state);
        assert_eq!(state.a, 0x00);
        assert!(state.p.carry);
        assert!(state.p.zero);
    }

    #[test]
    fn rol_carries_old_carry_into_bit0() {
        let mut state = CpuState::default();
        state.a = 0x00;
        state.p.carry = true;
        rol_acc(&mut state);
        assert_eq!(state.a, 0x01);
        assert!(!state.p.carry);
    }

    #[test]
    fn ror_carry_from_input_bit0_not_output() {
        let mut state = CpuState::default();
        state.a = 0x01;
        state.p.carry = false;
        ror_acc(&mut state);
        assert_eq!(state.a, 0x00);
        assert!(state.p.carry);
    }

    #[test]
    fn inx_wraps_and_updates_flags() {
        let mut state = CpuState::default();
        state.x = 0xFF;
        inx(&mut state);
        assert_eq!(state.x, 0x00);
        assert!(state.p.zero);
    }

    #[test]
    fn inc_mem_writes_back_incremented_value() {
        let mut bus = bus_with_prg();
        let mut state = CpuState::default();
        bus.write8(0x0010, 0x7F);
        inc_mem(&mut state, &mut bus, 0x0010, 0x7F);
        assert_eq!(bus.read8(0x0010), 0x80);
        assert!(state.p.negative);
    }
}
