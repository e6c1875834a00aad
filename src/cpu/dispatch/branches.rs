/*!
branches.rs - BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ.

Every branch is "if condition, PC = PC + sign-extend(offset)" where PC is
already pointing at the instruction following the branch. No cycle or
page-cross bookkeeping is modeled (see spec's Non-goals on cycle timing).
*/

use crate::cpu::state::CpuState;

fn branch_if(state: &mut CpuState, condition: bool, offset: u8) {
    if condition {
        let signed = offset as i8 as i16;
        state.pc = (state.pc as i16).wrapping_add(signed) as u16;
    }
}

pub fn bpl(state: &mut CpuState, offset: u8) {
    branch_if(state, !state.p.negative, offset);
}

pub fn bmi(state: &mut CpuState, offset: u8) {
    branch_if(state, state.p.negative, offset);
}

pub fn bvc(state: &mut CpuState, offset: u8) {
    branch_if(state, !state.p.overflow, offset);
}

pub fn bvs(state: &mut CpuState, offset: u8) {
    branch_if(state, state.p.overflow, offset);
}

pub fn bcc(state: &mut CpuState, offset: u8) {
    branch_if(state, !state.p.carry, offset);
}

pub fn bcs(state: &mut CpuState, offset: u8) {
    branch_if(state, state.p.carry, offset);
}

pub fn bne(state: &mut CpuState, offset: u8) {
    branch_if(state, !state.p.zero, offset);
}

pub fn beq(state: &mut CpuState, offset: u8) {
    branch_if(state, state.p.zero, offset);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_not_taken_leaves_pc() {
        let mut state = CpuState::default();
        state.pc = 0x8010;
        state.p.zero = false;
        beq(&mut state, 0x10);
        assert_eq!(state.pc, 0x8010);
    }

    #[test]
    fn branch_taken_adds_forward_offset() {
        let mut state = CpuState::default();
        state.pc = 0x8010;
        state.p.zero = true;
        beq(&mut state, 0x05);
        assert_eq!(state.pc, 0x8015);
    }

    #[test]
    fn branch_taken_with_negative_offset_goes_backward() {
        let mut state = CpuState::default();
        state.pc = 0x8010;
        state.p.carry = false;
        bcc(&mut state, 0xFC); // -4
        assert_eq!(state.pc, 0x800C);
    }
}
