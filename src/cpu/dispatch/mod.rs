/*!
dispatch/mod.rs - maps a decoded instruction and its resolved operand onto
one of the family handler modules.

Each family module (`load_store`, `logical`, `arithmetic`, `compare`, `rmw`,
`branches`, `control_flow`, `misc`) owns a cohesive slice of the 56
mnemonics; this module is just the big match that routes to them.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use crate::bus::Bus;
use crate::cpu::addressing::Resolved;
use crate::cpu::state::CpuState;
use crate::cpu::table::Mnemonic;

/// Execute `mnemonic` against the already-resolved operand.
///
/// RMW instructions (`Inc`/`Dec`/`Asl`/`Lsr`/`Rol`/`Ror` in a memory mode)
/// need both the operand's value and its address; `resolved.address` is
/// `None` only for `Accumulator`/`Implied`/`Immediate`/`Relative` modes,
/// none of which reach the memory-write arms below.
pub(crate) fn execute(mnemonic: Mnemonic, state: &mut CpuState, bus: &mut Bus, resolved: Resolved) {
    use Mnemonic::*;

    let value = resolved.value.unwrap_or(0);
    let address = resolved.address;

    match mnemonic {
        Lda => load_store::lda(state, value),
        Ldx => load_store::ldx(state, value),
        Ldy => load_store::ldy(state, value),
        Sta => load_store::sta(state, bus, address.expect("STA always has an address")),
        Stx => load_store::stx(state, bus, address.expect("STX always has an address")),
        Sty => load_store::sty(state, bus, address.expect("STY always has an address")),

        Tax => misc::tax(state),
        Tay => misc::tay(state),
        Txa => misc::txa(state),
        Tya => misc::tya(state),
        Tsx => misc::tsx(state),
        Txs => misc::txs(state),

        Pha => misc::pha(state, bus),
        Pla => misc::pla(state, bus),
        Php => misc::php(state, bus),
        Plp => misc::plp(state, bus),

        Clc => misc::clc(state),
        Sec => misc::sec(state),
        Cli => misc::cli(state),
        Sei => misc::sei(state),
        Cld => misc::cld(state),
        Sed => misc::sed(state),
        Clv => misc::clv(state),

        And => logical::and(state, value),
        Ora => logical::ora(state, value),
        Eor => logical::eor(state, value),
        Bit => logical::bit(state, value),

        Adc => arithmetic::adc(state, value),
        Sbc => arithmetic::sbc(state, value),

        Cmp => compare::cmp(state, value),
        Cpx => compare::cpx(state, value),
        Cpy => compare::cpy(state, value),

        Inx => rmw::inx(state),
        Iny => rmw::iny(state),
        Dex => rmw::dex(state),
        Dey => rmw::dey(state),
        Inc => rmw::inc_mem(state, bus, address.expect("INC always has an address"), value),
        Dec => rmw::dec_mem(state, bus, address.expect("DEC always has an address"), value),

        Asl => match address {
            Some(addr) => rmw::asl_mem(state, bus, addr, value),
            None => rmw::asl_acc(state),
        },
        Lsr => match address {
            Some(addr) => rmw::lsr_mem(state, bus, addr, value),
            None => rmw::lsr_acc(state),
        },
        Rol => match address {
            Some(addr) => rmw::rol_mem(state, bus, addr, value),
            None => rmw::rol_acc(state),
        },
        Ror => match address {
            Some(addr) => rmw::ror_mem(state, bus, addr, value),
            None => rmw::ror_acc(state),
        },

        Bpl => branches::bpl(state, value),
        Bmi => branches::bmi(state, value),
        Bvc => branches::bvc(state, value),
        Bvs => branches::bvs(state, value),
        Bcc => branches::bcc(state, value),
        Bcs => branches::bcs(state, value),
        Bne => branches::bne(state, value),
        Beq => branches::beq(state, value),

        Jmp => control_flow::jmp(state, address.expect("JMP always has an address")),
        Jsr => control_flow::jsr(state, bus, address.expect("JSR always has an address")),
        Rts => control_flow::rts(state, bus),
        Rti => control_flow::rti(state, bus),
        Brk => control_flow::brk(state, bus),

        Nop => {}
    }
}
