#![doc = r#"
PPU register window

Purpose
- Occupy the CPU-visible PPU register band (0x2000-0x3FFF) so the bus decode is
  complete without emulating a PPU.

Notes
- Mirroring: every address in the band is normalized to `0x2000 | (addr & 7)`.
- Reads return 0 and writes are dropped; a real PPU would sit behind the same
  normalized register index.
"#]

/// Stub for the eight mirrored PPU registers.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpuRegisterWindow;

impl PpuRegisterWindow {
    pub fn read(&self, addr: u16) -> u8 {
        let reg = mirror_ppu_reg(addr);
        log::trace!("PPU register read ${reg:04X} (stubbed)");
        0
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        let reg = mirror_ppu_reg(addr);
        log::trace!("PPU register write ${reg:04X} <- {value:02X} (ignored)");
    }
}

/// Normalize a CPU address in 0x2000..=0x3FFF to its register (0x2000..=0x2007).
#[inline]
pub fn mirror_ppu_reg(addr: u16) -> u16 {
    0x2000 | (addr & 0x0007)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_every_eight_bytes() {
        assert_eq!(mirror_ppu_reg(0x2000), 0x2000);
        assert_eq!(mirror_ppu_reg(0x2008), 0x2000);
        assert_eq!(mirror_ppu_reg(0x3FFF), 0x2007);
        assert_eq!(mirror_ppu_reg(0x2345), 0x2005);
    }

    #[test]
    fn reads_zero_regardless_of_writes() {
        let mut w = PpuRegisterWindow;
        w.write(0x2006, 0x3F);
        assert_eq!(w.read(0x2006), 0);
        assert_eq!(w.read(0x2002), 0);
    }
}
