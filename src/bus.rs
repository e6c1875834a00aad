/*!
bus.rs - maps a 16-bit CPU address onto RAM or cartridge PRG-ROM.

Address map:

```text
$0000-$07FF  2KiB internal RAM
$0800-$1FFF  mirrors of $0000-$07FF (mask with & 0x07FF)
$2000-$401F  PPU/APU/controller register window, out of scope here: reads
             return 0, writes are dropped, both silently (this is the
             expected no-op window, distinct from a genuinely unmapped
             stray address)
$4020-$7FFF  unmapped expansion/PRG-RAM area: reads return 0, writes are
             dropped, logged at `warn!` since nothing should be touching it
$8000-$FFFF  cartridge PRG-ROM, mirrored per `Cartridge::read_prg_rom`
```

Unmapped reads/writes never error (see spec.md §7); they are a logged,
silent no-op. Grounded on the teacher's `src/bus/mod.rs` facade and
`src/bus/ram.rs` mirroring mask, collapsed into a single module since the
PPU/APU/controller/DMA submodules it coordinated are out of scope.
*/

use log::warn;

use crate::cartridge::Cartridge;
use crate::memory::MemoryRegion;

const RAM_SIZE: usize = 0x0800;
const RAM_MIRROR_END: u16 = 0x1FFF;
const IO_WINDOW_END: u16 = 0x401F;
const PRG_ROM_START: u16 = 0x8000;

/// The CPU's view of its 16-bit address space.
pub struct Bus {
    ram: MemoryRegion,
    cartridge: Cartridge,
}

impl Bus {
    pub fn new(cartridge: Cartridge) -> Self {
        Self {
            ram: MemoryRegion::new(0x0000, RAM_SIZE),
            cartridge,
        }
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    pub fn read8(&self, address: u16) -> u8 {
        match address {
            0x0000..=RAM_MIRROR_END => {
                let mirrored = address & 0x07FF;
                self.ram.read8(mirrored).unwrap_or(0)
            }
            0x2000..=IO_WINDOW_END => 0,
            PRG_ROM_START..=0xFFFF => self.cartridge.read_prg_rom(address - PRG_ROM_START),
            _ => {
                warn!("read from unmapped bus address {address:#06x}");
                0
            }
        }
    }

    pub fn write8(&mut self, address: u16, value: u8) {
        match address {
            0x0000..=RAM_MIRROR_END => {
                let mirrored = address & 0x07FF;
                let _ = self.ram.write8(mirrored, value);
            }
            0x2000..=IO_WINDOW_END => {}
            PRG_ROM_START..=0xFFFF => {
                // PRG-ROM is read-only; writes in this range are dropped.
            }
            _ => {
                warn!("write to unmapped bus address {address:#06x}");
            }
        }
    }

    pub fn read16(&self, address: u16) -> u16 {
        let lo = self.read8(address) as u16;
        let hi = self.read8(address.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub fn write16(&mut self, address: u16, value: u16) {
        self.write8(address, (value & 0xFF) as u8);
        self.write8(address.wrapping_add(1), (value >> 8) as u8);
    }

    /// Overwrite a run of bytes starting at `address`, one `write8` per byte.
    pub fn write_slice(&mut self, address: u16, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            self.write8(address.wrapping_add(i as u16), b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::build_nrom_with_prg;

    fn bus_with_prg(prg: &[u8]) -> Bus {
        let bytes = build_nrom_with_prg(prg);
        let cart = Cartridge::from_ines_bytes(&bytes).unwrap();
        Bus::new(cart)
    }

    #[test]
    fn ram_mirrors_across_2kib_windows() {
        let mut bus = bus_with_prg(&[0; 16 * 1024]);
        bus.write8(0x0010, 0x99);
        assert_eq!(bus.read8(0x0010), 0x99);
        assert_eq!(bus.read8(0x0810), 0x99);
        assert_eq!(bus.read8(0x1010), 0x99);
        assert_eq!(bus.read8(0x1810), 0x99);
    }

    #[test]
    fn io_window_is_silent_zero() {
        let mut bus = bus_with_prg(&[0; 16 * 1024]);
        bus.write8(0x2000, 0xFF);
        assert_eq!(bus.read8(0x2000), 0);
        assert_eq!(bus.read8(0x4017), 0);
    }

    #[test]
    fn unmapped_expansion_area_reads_zero() {
        let bus = bus_with_prg(&[0; 16 * 1024]);
        assert_eq!(bus.read8(0x5000), 0);
    }

    #[test]
    fn prg_rom_readable_and_write_dropped() {
        let mut prg = vec![0u8; 16 * 1024];
        prg[0] = 0x42;
        let mut bus = bus_with_prg(&prg);
        assert_eq!(bus.read8(0x8000), 0x42);
        bus.write8(0x8000, 0x99);
        assert_eq!(bus.read8(0x8000), 0x42);
    }

    #[test]
    fn sixteen_kib_prg_mirrors_into_32kib_window() {
        let mut prg = vec![0u8; 16 * 1024];
        prg[0] = 0x7E;
        let bus = bus_with_prg(&prg);
        assert_eq!(bus.read8(0x8000), bus.read8(0xC000));
    }

    #[test]
    fn little_endian_16bit_reads() {
        let mut bus = bus_with_prg(&[0; 16 * 1024]);
        bus.write_slice(0x0000, &[0xCD, 0xAB]);
        assert_eq!(bus.read16(0x0000), 0xABCD);
    }
}
