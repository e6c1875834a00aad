//! Shared test utilities for building minimal iNES (v1) ROM images.
//!
//! These helpers de-duplicate iNES construction logic across the cartridge,
//! bus, and CPU test suites. They intentionally support just what the tests
//! need (NROM mapper, single trainer flag, single battery flag).

#![allow(dead_code)]

const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const PRG_BANK_LEN: usize = 16 * 1024;
const CHR_BANK_LEN: usize = 8 * 1024;

/// Build a minimal iNES (v1) image with configurable PRG/CHR sizes and flags.
///
/// - `prg_16k`: number of 16 KiB PRG units (1 => 16 KiB, 2 => 32 KiB)
/// - `chr_8k`: number of 8 KiB CHR units
/// - `flags6`: extra bits to OR into flags6 (mapper-low-nibble, mirroring, ...)
/// - `trainer`: whether to insert a 512-byte trainer after the header
/// - `battery`: whether to set the battery-RAM bit in flags6
pub fn build_ines(prg_16k: usize, chr_8k: usize, flags6: u8, trainer: bool, battery: bool) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        HEADER_LEN
            + if trainer { TRAINER_LEN } else { 0 }
            + prg_16k * PRG_BANK_LEN
            + chr_8k * CHR_BANK_LEN,
    );

    let mut flags6 = flags6;
    if trainer {
        flags6 |= 0x04;
    }
    if battery {
        flags6 |= 0x02;
    }

    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(0u8); // flags7
    bytes.extend_from_slice(&[0u8; 8]);

    if trainer {
        bytes.extend(std::iter::repeat(0u8).take(TRAINER_LEN));
    }

    bytes.extend(std::iter::repeat(0xAAu8).take(prg_16k * PRG_BANK_LEN));
    bytes.extend(std::iter::repeat(0xCCu8).take(chr_8k * CHR_BANK_LEN));

    bytes
}

/// Build a single-16KiB-bank NROM image with `prg` placed at the start of the
/// PRG bank and the reset/NMI/IRQ vectors pointed at `0x8000`.
pub fn build_nrom_with_prg(prg: &[u8]) -> Vec<u8> {
    assert!(prg.len() <= PRG_BANK_LEN, "program must fit in a 16 KiB PRG bank");

    let mut rom = build_ines(1, 0, 0, false, false);
    let prg_start = HEADER_LEN;
    rom[prg_start..prg_start + prg.len()].copy_from_slice(prg);

    set_vectors_in_prg(&mut rom[prg_start..prg_start + PRG_BANK_LEN], 0x8000, 0x8000, 0x8000);
    rom
}

/// Like [`build_nrom_with_prg`], but lets the caller choose the RESET vector.
pub fn build_nrom_with_prg_and_reset(prg: &[u8], reset: u16) -> Vec<u8> {
    assert!(prg.len() <= PRG_BANK_LEN, "program must fit in a 16 KiB PRG bank");

    let mut rom = build_ines(1, 0, 0, false, false);
    let prg_start = HEADER_LEN;
    rom[prg_start..prg_start + prg.len()].copy_from_slice(prg);

    set_vectors_in_prg(&mut rom[prg_start..prg_start + PRG_BANK_LEN], reset, 0x8000, 0x8000);
    rom
}

/// Write the NMI/RESET/IRQ vectors into a 16 KiB or 32 KiB PRG slice.
fn set_vectors_in_prg(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    let base = match prg.len() {
        PRG_BANK_LEN => 0x3FFA,
        n if n == PRG_BANK_LEN * 2 => 0x7FFA,
        other => panic!("unsupported PRG length for vector placement: {other} bytes"),
    };
    write_le_u16(prg, base, nmi);
    write_le_u16(prg, base + 2, reset);
    write_le_u16(prg, base + 4, irq);
}

fn write_le_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset] = (value & 0xFF) as u8;
    buf[offset + 1] = (value >> 8) as u8;
}
