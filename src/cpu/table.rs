/*!
table.rs - opcode byte -> (mnemonic, addressing mode, instruction size).

151 documented opcodes across 56 mnemonics; the 105 undocumented opcode
bytes map to `None` and surface as `CpuError::UnknownOpcode` at dispatch.
The table is built once behind a `OnceLock`, then indexed directly by
opcode byte on every `Cpu::step`.
*/

use std::sync::OnceLock;

use crate::cpu::addressing::AddressingMode;

/// The 56 documented 6502 mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny,
    Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror,
    Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

/// A decoded instruction: what to do, how to find its operand, how many
/// bytes (opcode included) it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub size: u16,
}

use AddressingMode::{
    Absolute as Abs, AbsoluteX as Absx, AbsoluteY as Absy, Accumulator as Acc, Immediate as Imm,
    Implied as Impl, Indirect as Ind, IndirectX as Indx, IndirectY as Indy, Relative as Rel,
    ZeroPage as Zp, ZeroPageX as Zpx, ZeroPageY as Zpy,
};
use Mnemonic::*;

const ENTRIES: &[(u8, Mnemonic, AddressingMode)] = &[
    (0x69, Adc, Imm), (0x65, Adc, Zp), (0x75, Adc, Zpx), (0x6D, Adc, Abs),
    (0x7D, Adc, Absx), (0x79, Adc, Absy), (0x61, Adc, Indx), (0x71, Adc, Indy),
    (0x29, And, Imm), (0x25, And, Zp), (0x35, And, Zpx), (0x2D, And, Abs),
    (0x3D, And, Absx), (0x39, And, Absy), (0x21, And, Indx), (0x31, And, Indy),
    (0x0A, Asl, Acc), (0x06, Asl, Zp), (0x16, Asl, Zpx), (0x0E, Asl, Abs), (0x1E, Asl, Absx),
    (0x90, Bcc, Rel),
    (0xB0, Bcs, Rel),
    (0xF0, Beq, Rel),
    (0x24, Bit, Zp), (0x2C, Bit, Abs),
    (0x30, Bmi, Rel),
    (0xD0, Bne, Rel),
    (0x10, Bpl, Rel),
    (0x00, Brk, Impl),
    (0x50, Bvc, Rel),
    (0x70, Bvs, Rel),
    (0x18, Clc, Impl),
    (0xD8, Cld, Impl),
    (0x58, Cli, Impl),
    (0xB8, Clv, Impl),
    (0xC9, Cmp, Imm), (0xC5, Cmp, Zp), (0xD5, Cmp, Zpx), (0xCD, Cmp, Abs),
    (0xDD, Cmp, Absx), (0xD9, Cmp, Absy), (0xC1, Cmp, Indx), (0xD1, Cmp, Indy),
    (0xE0, Cpx, Imm), (0xE4, Cpx, Zp), (0xEC, Cpx, Abs),
    (0xC0, Cpy, Imm), (0xC4, Cpy, Zp), (0xCC, Cpy, Abs),
    (0xC6, Dec, Zp), (0xD6, Dec, Zpx), (0xCE, Dec, Abs), (0xDE, Dec, Absx),
    (0xCA, Dex, Impl),
    (0x88, Dey, Impl),
    (0x49, Eor, Imm), (0x45, Eor, Zp), (0x55, Eor, Zpx), (0x4D, Eor, Abs),
    (0x5D, Eor, Absx), (0x59, Eor, Absy), (0x41, Eor, Indx), (0x51, Eor, Indy),
    (0xE6, Inc, Zp), (0xF6, Inc, Zpx), (0xEE, Inc, Abs), (0xFE, Inc, Absx),
    (0xE8, Inx, Impl),
    (0xC8, Iny, Impl),
    (0x4C, Jmp, Abs), (0x6C, Jmp, Ind),
    (0x20, Jsr, Abs),
    (0xA9, Lda, Imm), (0xA5, Lda, Zp), (0xB5, Lda, Zpx), (0xAD, Lda, Abs),
    (0xBD, Lda, Absx), (0xB9, Lda, Absy), (0xA1, Lda, Indx), (0xB1, Lda, Indy),
    (0xA2, Ldx, Imm), (0xA6, Ldx, Zp), (0xB6, Ldx, Zpy), (0xAE, Ldx, Abs), (0xBE, Ldx, Absy),
    (0xA0, Ldy, Imm), (0xA4, Ldy, Zp), (0xB4, Ldy, Zpx), (0xAC, Ldy, Abs), (0xBC, Ldy, Absx),
    (0x4A, Lsr, Acc), (0x46, Lsr, Zp), (0x56, Lsr, Zpx), (0x4E, Lsr, Abs), (0x5E, Lsr, Absx),
    (0xEA, Nop, Impl),
    (0x09, Ora, Imm), (0x05, Ora, Zp), (0x15, Ora, Zpx), (0x0D, Ora, Abs),
    (0x1D, Ora, Absx), (0x19, Ora, Absy), (0x01, Ora, Indx), (0x11, Ora, Indy),
    (0x48, Pha, Impl),
    (0x08, Php, Impl),
    (0x68, Pla, Impl),
    (0x28, Plp, Impl),
    (0x2A, Rol, Acc), (0x26, Rol, Zp), (0x36, Rol, Zpx), (0x2E, Rol, Abs), (0x3E, Rol, Absx),
    (0x6A, Ror, Acc), (0x66, Ror, Zp), (0x76, Ror, Zpx), (0x6E, Ror, Abs), (0x7E, Ror, Absx),
    (0x40, Rti, Impl),
    (0x60, Rts, Impl),
    (0xE9, Sbc, Imm), (0xE5, Sbc, Zp), (0xF5, Sbc, Zpx), (0xED, Sbc, Abs),
    (0xFD, Sbc, Absx), (0xF9, Sbc, Absy), (0xE1, Sbc, Indx), (0xF1, Sbc, Indy),
    (0x38, Sec, Impl),
    (0xF8, Sed, Impl),
    (0x78, Sei, Impl),
    (0x85, Sta, Zp), (0x95, Sta, Zpx), (0x8D, Sta, Abs), (0x9D, Sta, Absx),
    (0x99, Sta, Absy), (0x81, Sta, Indx), (0x91, Sta, Indy),
    (0x86, Stx, Zp), (0x96, Stx, Zpy), (0x8E, Stx, Abs),
    (0x84, Sty, Zp), (0x94, Sty, Zpx), (0x8C, Sty, Abs),
    (0xAA, Tax, Impl),
    (0xA8, Tay, Impl),
    (0xBA, Tsx, Impl),
    (0x8A, Txa, Impl),
    (0x9A, Txs, Impl),
    (0x98, Tya, Impl),
];

fn build_table() -> [Option<Instruction>; 256] {
    let mut table = [None; 256];
    for &(opcode, mnemonic, mode) in ENTRIES {
        table[opcode as usize] = Some(Instruction {
            mnemonic,
            mode,
            size: mode.operand_len() + 1,
        });
    }
    table
}

fn table() -> &'static [Option<Instruction>; 256] {
    static TABLE: OnceLock<[Option<Instruction>; 256]> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

/// Decode a single opcode byte, or `None` for an undocumented opcode.
pub fn lookup(opcode: u8) -> Option<Instruction> {
    table()[opcode as usize]
}
