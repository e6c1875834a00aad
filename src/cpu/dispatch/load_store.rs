/*!
load_store.rs - LDA/LDX/LDY/STA/STX/STY.

Loads set Z/N from the loaded byte. Stores touch no flags at all; they
just need somewhere to write the resolved address's byte.
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;

pub fn lda(state: &mut CpuState, value: u8) {
    state.a = value;
    state.p.set_zn(state.a);
}

pub fn ldx(state: &mut CpuState, value: u8) {
    state.x = value;
    state.p.set_zn(state.x);
}

pub fn ldy(state: &mut CpuState, value: u8) {
    state.y = value;
    state.p.set_zn(state.y);
}

pub fn sta(state: &CpuState, bus: &mut Bus, address: u16) {
    bus.write8(address, state.a);
}

pub fn stx(state: &CpuState, bus: &mut Bus, address: u16) {
    bus.write8(address, state.x);
}

pub fn sty(state: &CpuState, bus: &mut Bus, address: u16) {
    bus.write8(address, state.y);
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
    fn lda_sets_zero_flag() {
        let mut state = CpuState::default();
        lda(&mut state, 0x00);
        assert!(state.p.zero);
        assert!(!state.p.negative);
    }

    #[test]
    fn ldx_sets_negative_flag() {
        let mut state = CpuState::default();
        ldx(&mut state, 0x80);
        assert!(!state.p.zero);
        assert!(state.p.negative);
    }

    #[test]
    fn sta_writes_accumulator_to_bus() {
        let mut bus = bus_with_prg();
        let mut state = CpuState::default();
        state.a = 0x5A;
        sta(&state, &mut bus, 0x0010);
        assert_eq!(bus.read8(0x0010), 0x5A);
    }
}
