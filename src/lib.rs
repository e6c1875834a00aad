#![doc = r#"
6502-family CPU emulator core: cartridge parsing, an address bus, and a
fetch-decode-execute CPU.

Modules:
- cartridge: iNES v1 loader and cartridge metadata (mapper 0 / NROM only)
- memory: contiguous, base-addressed byte regions
- bus: maps the 16-bit CPU address space onto RAM and cartridge PRG-ROM
- status: the eight processor status flags, packable to/from a byte
- cpu: registers, addressing modes, the opcode table, and the CPU itself

In tests, shared iNES builders are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod memory;
pub mod status;

pub use bus::Bus;
pub use cartridge::Cartridge;
pub use cpu::{Cpu, CpuError};
pub use memory::MemoryRegion;
pub use status::ProcessorStatus;

// Not gated behind `#[cfg(test)]`: the criterion benches in `benches/` need
// these builders too, and `#![allow(dead_code)]` inside the module keeps a
// plain `cargo build` quiet about the unused-outside-tests functions.
pub mod test_utils;
