/*!
control_flow.rs - JMP, JSR, RTS, RTI, BRK.

JSR pushes `return_address - 1` (the address of the JSR instruction's last
byte); RTS undoes that by popping and adding 1 back. BRK pushes `PC + 1`
(PC already points past the single BRK opcode byte, so this lands one byte
further still, mirroring real hardware's BRK padding byte) then the status
byte as-is, and only afterward sets B on the live register — but, per the
system this was distilled from, it does not load the `0xFFFE` vector or
halt. It is a plain push instruction here, not a hardware interrupt.
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;
use crate::status::ProcessorStatus;

pub fn jmp(state: &mut CpuState, address: u16) {
    state.pc = address;
}

pub fn jsr(state: &mut CpuState, bus: &mut Bus, address: u16) {
    state.push16(bus, state.pc.wrapping_sub(1));
    state.pc = address;
}

pub fn rts(state: &mut CpuState, bus: &Bus) {
    state.pc = state.pop16(bus).wrapping_add(1);
}

pub fn rti(state: &mut CpuState, bus: &Bus) {
    let status = state.pop8(bus);
    state.p = ProcessorStatus::from_byte(status);
    state.pc = state.pop16(bus);
}

pub fn brk(state: &mut CpuState, bus: &mut Bus) {
    state.push16(bus, state.pc.wrapping_add(1));
    state.push8(bus, state.p.to_byte());
    state.p.brk = true;
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
    fn jsr_then_rts_returns_to_instruction_after_jsr() {
        let mut bus = bus_with_prg();
        let mut state = CpuState::default();
        state.pc = 0x8003; // already advanced past a 3-byte JSR at 0x8000
        jsr(&mut state, &mut bus, 0x9000);
        assert_eq!(state.pc, 0x9000);
        rts(&mut state, &bus);
        assert_eq!(state.pc, 0x8003);
    }

    #[test]
    fn brk_pushes_pc_plus_one_and_does_not_halt() {
        let mut bus = bus_with_prg();
        let mut state = CpuState::default();
        state.pc = 0x8001; // advanced past the BRK opcode byte
        brk(&mut state, &mut bus);
        assert!(state.p.brk);
        // RTI should unwind exactly what BRK pushed.
        rti(&mut state, &bus);
        assert_eq!(state.pc, 0x8002);
    }

    #[test]
    fn rti_pops_status_before_pc() {
        let mut bus = bus_with_prg();
        let mut state = CpuState::default();
        state.push16(&mut bus, 0x1234);
        state.push8(&mut bus, 0xAA);
        rti(&mut state, &bus);
        assert_eq!(state.p.to_byte(), 0xAA);
        assert_eq!(state.pc, 0x1234);
    }
}
