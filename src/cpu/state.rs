/*!
state.rs - 6502 architectural state (registers + status flags).

Overview
========
`CpuState` owns every architecturally visible register. It holds no bus,
decode or timing logic; those live in `dispatch`, `execute` and `cycles`.
Handlers reach it through the `CpuRegs` trait so they stay generic.

All registers are stored at their declared width (`u8` / `u16`), so every
mutation is masked by construction. Setters do not touch unrelated flag bits.

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V R B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  R = UNUSED (reserved; set by PLP/RTI and at power-on, otherwise left alone)
  B = BREAK
  D = DECIMAL (toggled by SED/CLD, ignored by the NES ALU)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY
*/

/// Processor status flag bit masks.
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Status byte loaded by the power-on sequence.
pub const POWER_ON_STATUS: u8 = BREAK | UNUSED | IRQ_DISABLE;

/// Status byte loaded by the RESET interrupt sequence.
pub const RESET_STATUS: u8 = ZERO | UNUSED;

/// Register file of the 6502.
///
/// Fields are public so snapshots and test fixtures can be built literally;
/// execution code goes through `CpuRegs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
}

impl Default for CpuState {
    fn default() -> Self {
        // Power-on register values; PC is loaded from the reset vector later.
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: 0x0000,
            status: POWER_ON_STATUS,
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Basic Accessors (Read)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    pub fn status(&self) -> u8 {
        self.status
    }

    // ---------------------------------------------------------------------
    // Mutators (Write)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    pub fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    pub fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    pub fn set_status(&mut self, v: u8) {
        self.status = v;
    }

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    /// Return true if every bit in `mask` is set.
    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) == mask
    }

    #[inline]
    pub fn set_flag_bit(&mut self, mask: u8) {
        self.status |= mask;
    }

    #[inline]
    pub fn clear_flag_bit(&mut self, mask: u8) {
        self.status &= !mask;
    }

    /// Clear exactly the bits in `mask`, then set them again when `value`.
    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        self.clear_flag_bit(mask);
        if value {
            self.set_flag_bit(mask);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_power_on_registers() {
        let s = CpuState::new();
        assert_eq!((s.a(), s.x(), s.y()), (0, 0, 0));
        assert_eq!(s.sp(), 0xFF);
        assert_eq!(s.status(), 0x34);
        assert!(s.is_flag_set(BREAK | UNUSED | IRQ_DISABLE));
    }

    #[test]
    fn flag_assignment_touches_only_owned_bits() {
        let mut s = CpuState::new();
        s.set_status(0xFF);
        s.assign_flag(CARRY, false);
        assert_eq!(s.status(), 0xFE);
        s.set_status(0x00);
        s.assign_flag(NEGATIVE | OVERFLOW, true);
        assert_eq!(s.status(), 0xC0);
        s.assign_flag(DECIMAL, true);
        assert!(s.is_flag_set(DECIMAL));
        s.assign_flag(DECIMAL, false);
        assert!(!s.is_flag_set(DECIMAL));
        assert_eq!(s.status(), 0xC0);
    }

    #[test]
    fn pc_advance_wraps() {
        let mut s = CpuState::new();
        s.set_pc(0xFFFF);
        s.advance_pc(1);
        assert_eq!(s.pc(), 0x0000);
        s.advance_pc(2);
        assert_eq!(s.pc(), 0x0002);
    }
}
