//! Shared test utilities: minimal iNES (v1) images and ready-made CPU fixtures.
//!
//! Notes on iNES header fields used here:
//! - bytes[0..4] = b"NES\x1A"
//! - byte 4 = PRG ROM size in 16 KiB units
//! - byte 5 = CHR ROM size in 8 KiB units (0 => loader allocates CHR RAM)
//! - byte 6 = Flags 6 (trainer bit 2, mapper low nibble)
//! - byte 7 = Flags 7 (mapper high nibble)
//! - byte 8 = PRG RAM size in 8 KiB units (0 => 8 KiB)
//!
//! Vectors for a 16 KiB PRG image live at PRG offsets 0x3FFA..=0x3FFF, which
//! the loader mirrors to $FFFA..=$FFFF.

#![allow(dead_code)]

use crate::bus::{Bus, CpuBus};
use crate::cartridge::Cartridge;
use crate::cpu::core::Cpu;

/// Default load address of test programs.
pub const PRG_START: u16 = 0x8000;

/// Build a minimal iNES (v1) image. PRG is filled with 0xAA, CHR with 0xCC.
pub fn build_ines(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    prg_ram_8k: u8,
    trainer: Option<&[u8; 512]>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        16 + trainer.map(|_| 512).unwrap_or(0) + prg_16k * 16 * 1024 + chr_8k * 8 * 1024,
    );

    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(flags7);
    bytes.push(prg_ram_8k);
    bytes.extend_from_slice(&[0u8; 7]);

    if let Some(t) = trainer {
        bytes.extend_from_slice(t);
    }
    bytes.extend(std::iter::repeat_n(0xAA, prg_16k * 16 * 1024));
    bytes.extend(std::iter::repeat_n(0xCC, chr_8k * 8 * 1024));
    bytes
}

/// Build a 16 KiB NROM image with `prg` at $8000 and the given
/// (reset, nmi, irq) vectors, defaulting all three to $8000.
pub fn build_nrom_with_prg(prg: &[u8], vectors: Option<(u16, u16, u16)>) -> Vec<u8> {
    assert!(
        prg.len() <= 16 * 1024 - 6,
        "Program must fit below the vectors of a 16 KiB PRG bank"
    );
    let mut rom = build_ines(1, 1, 0, 0, 1, None);
    let prg_area = &mut rom[16..16 + 16 * 1024];
    prg_area[..prg.len()].copy_from_slice(prg);
    let (reset, nmi, irq) = vectors.unwrap_or((PRG_START, PRG_START, PRG_START));
    set_vectors_in_prg(prg_area, reset, nmi, irq);
    rom
}

/// Write NMI, RESET and IRQ/BRK vectors at the end of a 16 or 32 KiB PRG slice.
pub fn set_vectors_in_prg(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    let base = match prg.len() {
        16384 => 0x3FFA,
        32768 => 0x7FFA,
        other => panic!("Unsupported PRG length for vector placement: {other} bytes"),
    };
    prg[base..base + 2].copy_from_slice(&nmi.to_le_bytes());
    prg[base + 2..base + 4].copy_from_slice(&reset.to_le_bytes());
    prg[base + 4..base + 6].copy_from_slice(&irq.to_le_bytes());
}

/// Bus with an NROM cartridge holding `prg` at $8000.
pub fn nrom_bus(prg: &[u8], vectors: Option<(u16, u16, u16)>) -> Bus {
    let rom = build_nrom_with_prg(prg, vectors);
    Bus::with_cartridge(Cartridge::from_ines_bytes(&rom).expect("parse test cartridge"))
}

/// Powered-on CPU at $8000 running `prg`. The power-on cycle cost is discarded.
pub fn setup(prg: &[u8]) -> (Cpu, Bus) {
    setup_with_vectors(prg, None)
}

pub fn setup_with_vectors(prg: &[u8], vectors: Option<(u16, u16, u16)>) -> (Cpu, Bus) {
    let mut bus = nrom_bus(prg, vectors);
    let mut cpu = Cpu::new();
    cpu.power_on(&mut bus);
    (cpu, bus)
}

/// 64 KiB of flat RAM: every address is readable and writable.
pub struct FlatMemory {
    pub data: Vec<u8>,
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            data: vec![0; 0x10000],
        }
    }

    /// Place `bytes` at `addr` and point the reset vector there.
    pub fn with_program(addr: u16, bytes: &[u8]) -> Self {
        let mut mem = Self::new();
        mem.load(addr, bytes);
        mem.load(0xFFFC, &addr.to_le_bytes());
        mem
    }

    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let start = addr as usize;
        self.data[start..start + bytes.len()].copy_from_slice(bytes);
    }
}

impl CpuBus for FlatMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_basic_ines() {
        let rom = build_ines(2, 1, 0x01, 0x00, 1, None);
        assert_eq!(&rom[0..4], b"NES\x1A");
        assert_eq!(&rom[4..9], &[2, 1, 0x01, 0x00, 1]);
        assert_eq!(rom.len(), 16 + 2 * 16 * 1024 + 8 * 1024);
    }

    #[test]
    fn writes_vectors_for_16k_prg() {
        let mut prg = vec![0u8; 16 * 1024];
        set_vectors_in_prg(&mut prg, 0x8123, 0x8456, 0x8ABC);
        assert_eq!(&prg[0x3FFA..], &[0x56, 0x84, 0x23, 0x81, 0xBC, 0x8A]);
    }

    #[test]
    fn nrom_bus_exposes_program_and_vectors() {
        let mut bus = nrom_bus(&[0xA9, 0x01], Some((0x8000, 0x9000, 0xA000)));
        assert_eq!(bus.read(0x8000), 0xA9);
        assert_eq!(bus.read(0xC001), 0x01);
        assert_eq!(bus.read_word(0xFFFA), 0x9000);
        assert_eq!(bus.read_word(0xFFFC), 0x8000);
        assert_eq!(bus.read_word(0xFFFE), 0xA000);
    }
}
