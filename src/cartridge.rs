/*!
Cartridge with iNES (v1) loader and a fixed, NROM-equivalent page map.

Features:
- Parse the minimal iNES header fields (PRG/CHR size, trainer flag, PRG-RAM size)
- Skip an optional 512-byte trainer (not retained)
- Store PRG-ROM and CHR memory as 1 KiB pages; allocate 8 x 1 KiB CHR RAM when
  the header declares no CHR-ROM
- Map CPU $8000-$FFFF through a 32-slot bank table that mirrors when fewer than
  32 PRG pages are present

CPU-visible bands (`read_prg` / `write_prg`):
- $4020-$5FFF: expansion area, reads 0, writes ignored
- $6000-$7FFF: PRG-RAM indexed by `addr & 0x1FFF`
- $8000-$FFFF: PRG-ROM page `prg_map[(addr & 0x7FFF) >> 10]`, offset `addr & 0x3FF`

Notes:
- PRG-RAM allocation: header byte 8 is the size in 8 KiB units; 0 means 8 KiB.
- Mapper numbers other than 0 are accepted with a warning and use the same fixed
  page map; bank switching is not modeled.
*/

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Size of a PRG-ROM / CHR page.
pub const PAGE_SIZE: usize = 0x0400;
/// Size of the iNES header.
pub const HEADER_LEN: usize = 16;
/// Size of the optional trainer block.
pub const TRAINER_LEN: usize = 512;
/// One unit of PRG-RAM as counted by header byte 8.
pub const PRG_RAM_UNIT: usize = 8 * 1024;

const INES_MAGIC: &[u8; 4] = b"NES\x1A";
const PRG_SLOTS: usize = 32;
const CHR_SLOTS: usize = 8;

/// Errors raised while loading an iNES image.
#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("failed to read iNES file: {0}")]
    Io(#[from] std::io::Error),
    #[error("data too small for iNES header ({0} bytes)")]
    HeaderTooShort(usize),
    #[error("invalid iNES header magic (expected NES<1A>)")]
    BadMagic,
    #[error("iNES header declares no PRG-ROM")]
    NoPrgRom,
    #[error("data too small for {section}: need {needed} bytes, have {available}")]
    Truncated {
        section: &'static str,
        needed: usize,
        available: usize,
    },
}

/// The header fields this loader consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InesHeader {
    pub prg_rom_16k: u8,
    pub chr_rom_8k: u8,
    pub flags6: u8,
    pub flags7: u8,
    pub prg_ram_8k: u8,
}

impl InesHeader {
    pub fn parse(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < HEADER_LEN {
            return Err(CartridgeError::HeaderTooShort(data.len()));
        }
        if &data[0..4] != INES_MAGIC {
            return Err(CartridgeError::BadMagic);
        }
        Ok(Self {
            prg_rom_16k: data[4],
            chr_rom_8k: data[5],
            flags6: data[6],
            flags7: data[7],
            prg_ram_8k: data[8],
        })
    }

    pub fn has_trainer(&self) -> bool {
        (self.flags6 & 0b0000_0100) != 0
    }

    /// Mapper number: high nibble from flags7, low nibble from flags6.
    pub fn mapper_id(&self) -> u8 {
        (self.flags7 & 0xF0) | (self.flags6 >> 4)
    }

    pub fn prg_pages(&self) -> usize {
        self.prg_rom_16k as usize * 16
    }

    pub fn chr_rom_pages(&self) -> usize {
        self.chr_rom_8k as usize * 8
    }

    pub fn prg_ram_len(&self) -> usize {
        (self.prg_ram_8k.max(1) as usize) * PRG_RAM_UNIT
    }
}

#[derive(Clone)]
pub struct Cartridge {
    header: InesHeader,
    prg_rom: Vec<u8>,
    prg_map: [usize; PRG_SLOTS],
    prg_ram: Vec<u8>,
    chr: Vec<u8>,
    chr_map: [usize; CHR_SLOTS],
    chr_is_ram: bool,
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("mapper_id", &self.header.mapper_id())
            .field("prg_pages", &self.prg_pages())
            .field("chr_pages", &self.chr_pages())
            .field("chr_is_ram", &self.chr_is_ram)
            .field("prg_ram_len", &self.prg_ram.len())
            .finish()
    }
}

impl Cartridge {
    // -------------- Construction --------------

    /// Load a cartridge from raw iNES bytes.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        let header = InesHeader::parse(data)?;

        let prg_pages = header.prg_pages();
        if prg_pages == 0 {
            return Err(CartridgeError::NoPrgRom);
        }
        if header.mapper_id() != 0 {
            log::warn!(
                "mapper {} is not emulated; using fixed PRG/CHR mapping",
                header.mapper_id()
            );
        }

        let mut offset = HEADER_LEN;
        if header.has_trainer() {
            offset = take(data, offset, TRAINER_LEN, "trainer")?.1;
        }

        let (prg, next) = take(data, offset, prg_pages * PAGE_SIZE, "PRG ROM")?;
        let prg_rom = prg.to_vec();
        offset = next;

        let chr_rom_pages = header.chr_rom_pages();
        let (chr, chr_is_ram) = if chr_rom_pages == 0 {
            (vec![0; CHR_SLOTS * PAGE_SIZE], true)
        } else {
            let (chr, _) = take(data, offset, chr_rom_pages * PAGE_SIZE, "CHR ROM")?;
            (chr.to_vec(), false)
        };

        let cart = Self {
            header,
            prg_map: bank_table(prg_pages),
            prg_rom,
            prg_ram: vec![0; header.prg_ram_len()],
            chr_map: bank_table(chr.len() / PAGE_SIZE),
            chr,
            chr_is_ram,
        };
        log::debug!("loaded cartridge: {cart:?}");
        Ok(cart)
    }

    /// Load a cartridge from an iNES file (.nes).
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let bytes = fs::read(path)?;
        Self::from_ines_bytes(&bytes)
    }

    // -------------- CPU side --------------

    /// CPU read in cartridge space ($4020-$FFFF).
    pub fn read_prg(&self, addr: u16) -> u8 {
        match addr {
            0x6000..=0x7FFF => self
                .prg_ram
                .get((addr & 0x1FFF) as usize)
                .copied()
                .unwrap_or(0),
            0x8000..=0xFFFF => {
                let page = self.prg_map[((addr & 0x7FFF) >> 10) as usize];
                self.prg_rom[page * PAGE_SIZE + (addr & 0x03FF) as usize]
            }
            _ => 0,
        }
    }

    /// CPU write in cartridge space. Only PRG-RAM accepts data.
    pub fn write_prg(&mut self, addr: u16, value: u8) {
        if !(0x6000..=0x7FFF).contains(&addr) {
            return;
        }
        if let Some(slot) = self.prg_ram.get_mut((addr & 0x1FFF) as usize) {
            *slot = value;
        }
    }

    // -------------- PPU side (pattern tables) --------------

    /// Read CHR memory at a pattern-table address ($0000-$1FFF).
    pub fn read_chr(&self, addr: u16) -> u8 {
        let (page, offset) = self.chr_slot(addr);
        self.chr[page * PAGE_SIZE + offset]
    }

    /// Write CHR memory; ignored unless the cartridge has CHR RAM.
    pub fn write_chr(&mut self, addr: u16, value: u8) {
        if !self.chr_is_ram {
            return;
        }
        let (page, offset) = self.chr_slot(addr);
        self.chr[page * PAGE_SIZE + offset] = value;
    }

    #[inline]
    fn chr_slot(&self, addr: u16) -> (usize, usize) {
        let slot = ((addr & 0x1FFF) >> 10) as usize;
        (self.chr_map[slot], (addr & 0x03FF) as usize)
    }

    // -------------- Accessors --------------

    pub fn header(&self) -> &InesHeader {
        &self.header
    }

    pub fn mapper_id(&self) -> u8 {
        self.header.mapper_id()
    }

    pub fn has_trainer(&self) -> bool {
        self.header.has_trainer()
    }

    pub fn prg_pages(&self) -> usize {
        self.prg_rom.len() / PAGE_SIZE
    }

    pub fn chr_pages(&self) -> usize {
        self.chr.len() / PAGE_SIZE
    }

    pub fn chr_is_ram(&self) -> bool {
        self.chr_is_ram
    }

    pub fn prg_ram_len(&self) -> usize {
        self.prg_ram.len()
    }
}

/// Slot i maps to page i mod `pages`, so short images mirror across the window.
fn bank_table<const N: usize>(pages: usize) -> [usize; N] {
    std::array::from_fn(|i| i % pages.max(1))
}

/// Slice `len` bytes at `offset`, returning the slice and the next offset.
fn take<'a>(
    data: &'a [u8],
    offset: usize,
    len: usize,
    section: &'static str,
) -> Result<(&'a [u8], usize), CartridgeError> {
    let end = offset + len;
    match data.get(offset..end) {
        Some(bytes) => Ok((bytes, end)),
        None => Err(CartridgeError::Truncated {
            section,
            needed: end,
            available: data.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::build_ines;

    #[test]
    fn parse_nrom_256_with_chr_rom() {
        let data = build_ines(2, 1, 0, 0, 1, None);
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert_eq!(cart.mapper_id(), 0);
        assert_eq!(cart.prg_pages(), 32);
        assert_eq!(cart.chr_pages(), 8);
        assert!(!cart.chr_is_ram());
        assert_eq!(cart.prg_ram_len(), 8 * 1024);
        assert_eq!(cart.read_prg(0x8000), 0xAA);
        assert_eq!(cart.read_prg(0xFFFF), 0xAA);
        assert_eq!(cart.read_chr(0x1FFF), 0xCC);
    }

    #[test]
    fn sixteen_k_prg_mirrors_into_upper_window() {
        let mut data = build_ines(1, 1, 0, 0, 0, None);
        // Distinct bytes at the start and end of the single 16 KiB bank.
        data[HEADER_LEN] = 0x11;
        data[HEADER_LEN + 0x3FFF] = 0x22;
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert_eq!(cart.prg_pages(), 16);
        assert_eq!(cart.read_prg(0x8000), 0x11);
        assert_eq!(cart.read_prg(0xC000), 0x11);
        assert_eq!(cart.read_prg(0xBFFF), 0x22);
        assert_eq!(cart.read_prg(0xFFFF), 0x22);
    }

    #[test]
    fn pages_are_selected_by_bank_table() {
        let mut data = build_ines(2, 1, 0, 0, 1, None);
        for page in 0..32 {
            data[HEADER_LEN + page * PAGE_SIZE + 5] = page as u8;
        }
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        for page in 0..32u16 {
            assert_eq!(cart.read_prg(0x8005 + page * 0x400), page as u8);
        }
    }

    #[test]
    fn chr_ram_when_header_has_no_chr() {
        let data = build_ines(1, 0, 0, 0, 0, None);
        let mut cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert!(cart.chr_is_ram());
        assert_eq!(cart.chr_pages(), 8);
        cart.write_chr(0x0ABC, 0x5A);
        assert_eq!(cart.read_chr(0x0ABC), 0x5A);
    }

    #[test]
    fn chr_rom_ignores_writes() {
        let data = build_ines(1, 1, 0, 0, 0, None);
        let mut cart = Cartridge::from_ines_bytes(&data).expect("parse");
        cart.write_chr(0x0010, 0x00);
        assert_eq!(cart.read_chr(0x0010), 0xCC);
    }

    #[test]
    fn trainer_is_skipped() {
        let trainer = [0x77u8; TRAINER_LEN];
        let data = build_ines(1, 1, 0b0000_0100, 0, 1, Some(&trainer));
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert!(cart.has_trainer());
        assert_eq!(cart.read_prg(0x8000), 0xAA);
    }

    #[test]
    fn prg_ram_read_write_and_expansion_area() {
        let data = build_ines(1, 1, 0, 0, 0, None);
        let mut cart = Cartridge::from_ines_bytes(&data).expect("parse");
        cart.write_prg(0x6000, 0x42);
        cart.write_prg(0x7FFF, 0x43);
        assert_eq!(cart.read_prg(0x6000), 0x42);
        assert_eq!(cart.read_prg(0x7FFF), 0x43);

        cart.write_prg(0x5000, 0x99);
        assert_eq!(cart.read_prg(0x4020), 0);
        assert_eq!(cart.read_prg(0x5000), 0);

        // PRG-ROM is read-only.
        cart.write_prg(0x8000, 0x00);
        assert_eq!(cart.read_prg(0x8000), 0xAA);
    }

    #[test]
    fn prg_ram_size_from_header() {
        let data = build_ines(1, 1, 0, 0, 2, None);
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert_eq!(cart.prg_ram_len(), 16 * 1024);
    }

    #[test]
    fn mapper_number_combines_nibbles() {
        let data = build_ines(1, 1, 0x10, 0x40, 0, None);
        let cart = Cartridge::from_ines_bytes(&data).expect("parse");
        assert_eq!(cart.mapper_id(), 0x41);
    }

    #[test]
    fn malformed_images_are_rejected() {
        assert!(matches!(
            Cartridge::from_ines_bytes(b"NES\x1A"),
            Err(CartridgeError::HeaderTooShort(4))
        ));

        let mut bad_magic = build_ines(1, 1, 0, 0, 0, None);
        bad_magic[3] = 0;
        assert!(matches!(
            Cartridge::from_ines_bytes(&bad_magic),
            Err(CartridgeError::BadMagic)
        ));

        let no_prg = build_ines(0, 1, 0, 0, 0, None);
        assert!(matches!(
            Cartridge::from_ines_bytes(&no_prg),
            Err(CartridgeError::NoPrgRom)
        ));

        let mut short = build_ines(1, 1, 0, 0, 0, None);
        short.truncate(HEADER_LEN + 100);
        let err = Cartridge::from_ines_bytes(&short).unwrap_err();
        assert!(err.to_string().contains("PRG ROM"));
    }
}
