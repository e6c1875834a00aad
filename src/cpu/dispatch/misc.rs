/*!
misc.rs - transfers, stack, and flag-set/clear instructions.

Transfers: TAX, TAY, TXA, TYA, TSX, TXS (TXS alone touches no flags).
Stack: PHA, PLA, PHP, PLP.
Flags: CLC, SEC, CLI, SEI, CLD, SED, CLV.
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;

pub fn tax(state: &mut CpuState) {
    state.x = state.a;
    state.p.set_zn(state.x);
}

pub fn tay(state: &mut CpuState) {
    state.y = state.a;
    state.p.set_zn(state.y);
}

pub fn txa(state: &mut CpuState) {
    state.a = state.x;
    state.p.set_zn(state.a);
}

pub fn tya(state: &mut CpuState) {
    state.a = state.y;
    state.p.set_zn(state.a);
}

pub fn tsx(state: &mut CpuState) {
    state.x = state.sp;
    state.p.set_zn(state.x);
}

pub fn txs(state: &mut CpuState) {
    state.sp = state.x;
}

pub fn pha(state: &mut CpuState, bus: &mut Bus) {
    state.push8(bus, state.a);
}

pub fn pla(state: &mut CpuState, bus: &Bus) {
    state.a = state.pop8(bus);
    state.p.set_zn(state.a);
}

/// PHP pushes the status byte exactly as it stands; no bits are forced.
pub fn php(state: &mut CpuState, bus: &mut Bus) {
    state.push8(bus, state.p.to_byte());
}

/// PLP restores the status byte verbatim; no bits are forced on the way in.
pub fn plp(state: &mut CpuState, bus: &Bus) {
    let byte = state.pop8(bus);
    state.p = crate::status::ProcessorStatus::from_byte(byte);
}

pub fn clc(state: &mut CpuState) {
    state.p.carry = false;
}

pub fn sec(state: &mut CpuState) {
    state.p.carry = true;
}

pub fn cli(state: &mut CpuState) {
    state.p.irq_disable = false;
}

pub fn sei(state: &mut CpuState) {
    state.p.irq_disable = true;
}

pub fn cld(state: &mut CpuState) {
    state.p.decimal = false;
}

pub fn sed(state: &mut CpuState) {
    state.p.decimal = true;
}

pub fn clv(state: &mut CpuState) {
    state.p.overflow = false;
}
