/*!
cartridge.rs - iNES 1.0 cartridge image parsing.

Header layout (16 bytes):

```text
offset  size  field
0       4     magic "NES\x1A"
4       1     PRG-ROM size in 16 KiB units
5       1     CHR-ROM size in 8 KiB units
6       1     flags 6 (mirroring, battery, trainer, mapper low nibble)
7       1     flags 7 (mapper high nibble, NES 2.0 marker bits)
8..16   8     reserved / unused by this crate
```

A 512-byte trainer, if present, sits between the header and PRG-ROM. Only
mapper 0 (NROM) is supported; anything else is out of scope (see spec.md
Non-goals). Grounded on the teacher's `src/cartridge.rs`, whose trainer
offset arithmetic (`16 + trainer_len`) is already correct and is kept as-is.
*/

use std::fs;
use std::path::Path;

use log::{debug, error};
use thiserror::Error;

const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const PRG_BANK_LEN: usize = 16 * 1024;
const CHR_BANK_LEN: usize = 8 * 1024;
const MAGIC: [u8; 4] = *b"NES\x1A";

/// Nametable mirroring declared by the cartridge header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Errors that can occur while parsing an iNES image.
#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("missing or invalid iNES magic bytes")]
    InvalidMagic,
    #[error("NES 2.0 headers are not supported")]
    UnsupportedVersion,
    #[error("unsupported mapper id {0}, only mapper 0 (NROM) is supported")]
    UnsupportedMapper(u8),
    #[error("file truncated: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("failed to read cartridge file: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for CartridgeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidMagic, Self::InvalidMagic) => true,
            (Self::UnsupportedVersion, Self::UnsupportedVersion) => true,
            (Self::UnsupportedMapper(a), Self::UnsupportedMapper(b)) => a == b,
            (
                Self::Truncated { expected: ea, actual: aa },
                Self::Truncated { expected: eb, actual: ab },
            ) => ea == eb && aa == ab,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

impl Eq for CartridgeError {}

/// A parsed iNES cartridge image: header geometry plus PRG/CHR banks.
#[derive(Debug, Clone)]
pub struct Cartridge {
    mapper_id: u8,
    mirroring: Mirroring,
    has_battery_ram: bool,
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
}

impl Cartridge {
    /// Read and parse an iNES file from `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let bytes = fs::read(path)?;
        Self::from_ines_bytes(&bytes)
    }

    /// Parse a complete iNES file image from `bytes`.
    pub fn from_ines_bytes(bytes: &[u8]) -> Result<Self, CartridgeError> {
        if bytes.len() < HEADER_LEN {
            error!("cartridge truncated before header: {} bytes", bytes.len());
            return Err(CartridgeError::Truncated {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }

        let header = &bytes[0..HEADER_LEN];
        if header[0..4] != MAGIC {
            error!("cartridge missing iNES magic");
            return Err(CartridgeError::InvalidMagic);
        }

        let flags6 = header[6];
        let flags7 = header[7];

        // NES 2.0 is signalled by bits 2-3 of flags7 being 0b10.
        if flags7 & 0x0C == 0x08 {
            error!("cartridge declares NES 2.0 header, unsupported");
            return Err(CartridgeError::UnsupportedVersion);
        }

        let mapper_id = (flags6 & 0xF0) | (flags7 >> 4);
        if mapper_id != 0 {
            error!("cartridge declares mapper {mapper_id}, unsupported");
            return Err(CartridgeError::UnsupportedMapper(mapper_id));
        }

        let has_trainer = flags6 & 0x04 != 0;
        let has_battery_ram = flags6 & 0x02 != 0;
        let mirroring = match flags6 & 0x03 {
            0 => Mirroring::Horizontal,
            1 => Mirroring::Vertical,
            _ => Mirroring::FourScreen,
        };

        let prg_banks = header[4] as usize;
        let chr_banks = header[5] as usize;
        let prg_len = prg_banks * PRG_BANK_LEN;
        let chr_len = chr_banks * CHR_BANK_LEN;

        let trainer_len = if has_trainer { TRAINER_LEN } else { 0 };
        let prg_rom_start = HEADER_LEN + trainer_len;
        let chr_rom_start = prg_rom_start + prg_len;
        let expected_len = chr_rom_start + chr_len;

        if bytes.len() < expected_len {
            error!(
                "cartridge truncated: expected {expected_len} bytes, got {}",
                bytes.len()
            );
            return Err(CartridgeError::Truncated {
                expected: expected_len,
                actual: bytes.len(),
            });
        }

        let prg_rom = bytes[prg_rom_start..prg_rom_start + prg_len].to_vec();
        let chr_rom = bytes[chr_rom_start..chr_rom_start + chr_len].to_vec();

        debug!(
            "parsed cartridge: mapper={mapper_id} prg={}KiB chr={}KiB mirroring={mirroring:?} battery={has_battery_ram}",
            prg_len / 1024,
            chr_len / 1024,
        );

        Ok(Self {
            mapper_id,
            mirroring,
            has_battery_ram,
            prg_rom,
            chr_rom,
        })
    }

    pub fn mapper_id(&self) -> u8 {
        self.mapper_id
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    pub fn has_battery_ram(&self) -> bool {
        self.has_battery_ram
    }

    pub fn prg_rom_bytes(&self) -> &[u8] {
        &self.prg_rom
    }

    pub fn chr_rom_bytes(&self) -> &[u8] {
        &self.chr_rom
    }

    /// Read a byte from PRG-ROM space, mirroring a single 16 KiB bank across
    /// the full 32 KiB window when only one bank is present (mapper 0 NROM).
    pub fn read_prg_rom(&self, offset: u16) -> u8 {
        if self.prg_rom.is_empty() {
            return 0;
        }
        let offset = offset as usize % self.prg_rom.len();
        self.prg_rom[offset]
    }

    pub fn read_chr_rom(&self, offset: u16) -> u8 {
        if self.chr_rom.is_empty() {
            return 0;
        }
        let offset = offset as usize % self.chr_rom.len();
        self.chr_rom[offset]
    }
}
