#![doc = r#"
Bus module: CPU address decoding for the NES memory map.

Overview
- `CpuBus` is the memory abstraction the CPU core is generic over. Anything that
  can answer byte reads and writes over a 16-bit address space can drive the core
  (the NES `Bus` here, flat test memories, or an external system bus).
- `Bus` is the NES implementation: it owns the internal RAM and an attached
  cartridge and routes each access by address band.

Address map (CPU):
- $0000-$07FF: 2KB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)
- $2000-$2007: PPU registers (stubbed, read 0)
- $2008-$3FFF: Mirrors of $2000-$2007 (normalized to 0x2000 | (addr & 7))
- $4000-$401F: APU / IO registers (not modeled: read 0, writes ignored)
- $4020-$FFFF: Cartridge space (expansion, PRG-RAM, PRG-ROM)

Modules
- ram: 2KB mirrored internal RAM.
- ppu_registers: CPU-visible PPU register window stub.
"#]

pub mod ppu_registers;
pub mod ram;

use crate::bus::ppu_registers::PpuRegisterWindow;
use crate::bus::ram::Ram;
use crate::cartridge::Cartridge;

/// CPU-visible memory interface.
///
/// Reads take `&mut self` because real devices behind a bus may have read
/// side effects; the core never assumes a read is pure.
pub trait CpuBus {
    fn read(&mut self, addr: u16) -> u8;

    fn write(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read; the high byte address wraps at 0xFFFF.
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// NES CPU bus: internal RAM, PPU register window, and the cartridge.
#[derive(Debug, Default)]
pub struct Bus {
    ram: Ram,
    ppu_registers: PpuRegisterWindow,
    cartridge: Option<Cartridge>,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bus with `cartridge` already attached.
    pub fn with_cartridge(cartridge: Cartridge) -> Self {
        let mut bus = Self::new();
        bus.attach_cartridge(cartridge);
        bus
    }

    /// Attach (or replace) the cartridge serving $4020-$FFFF.
    pub fn attach_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = Some(cartridge);
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    pub fn cartridge_mut(&mut self) -> Option<&mut Cartridge> {
        self.cartridge.as_mut()
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }
}

impl CpuBus for Bus {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x3FFF => self.ppu_registers.read(addr),
            0x4000..=0x401F => 0,
            _ => match &self.cartridge {
                Some(cart) => cart.read_prg(addr),
                None => 0,
            },
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram.write(addr, value),
            0x2000..=0x3FFF => self.ppu_registers.write(addr, value),
            0x4000..=0x401F => {}
            _ => {
                if let Some(cart) = self.cartridge.as_mut() {
                    cart.write_prg(addr, value);
                }
            }
        }
    }
}
