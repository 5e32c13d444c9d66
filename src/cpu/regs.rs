/*!
regs.rs - `CpuRegs`, the register + flag interface used by instruction code.

The trait deliberately excludes bus access, stack and instruction fetch;
those take an explicit `&mut impl CpuBus` at the call site so the register
file and the memory map can be borrowed independently.

Handlers are written against the trait with static dispatch:

```
# use nescpu::cpu::CpuRegs;
fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}
# let mut state = nescpu::cpu::CpuState::new();
# lda(&mut state, 0x80);
# assert_eq!(state.a(), 0x80);
```
*/

use crate::cpu::state::{BREAK, CARRY, CpuState, NEGATIVE, OVERFLOW, ZERO};

/// Minimal 6502 register + flag API needed by addressing, execute and dispatch code.
pub trait CpuRegs {
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> u8;

    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: u8);

    /// Advance PC by `delta` (wrapping at 16 bits).
    fn advance_pc(&mut self, delta: u16);

    #[inline]
    fn advance_pc_one(&mut self) {
        self.advance_pc(1);
    }

    /// Return true if mask bits are set.
    fn is_flag_set(&self, mask: u8) -> bool;

    /// Assign specific flag bits based on boolean `value` (set or clear).
    fn assign_flag(&mut self, mask: u8, value: bool);

    /// ZERO and NEGATIVE from an 8-bit result.
    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, (result & 0x80) != 0);
    }

    #[inline]
    fn update_carry(&mut self, carry: bool) {
        self.assign_flag(CARRY, carry);
    }

    #[inline]
    fn update_overflow(&mut self, overflow: bool) {
        self.assign_flag(OVERFLOW, overflow);
    }

    /// Status byte as pushed by a hardware interrupt: P with BREAK cleared.
    #[inline]
    fn status_for_interrupt_push(&self) -> u8 {
        self.status() & !BREAK
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a()
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x()
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y()
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp()
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc()
    }
    #[inline]
    fn status(&self) -> u8 {
        self.status()
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.set_a(v);
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.set_x(v);
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.set_y(v);
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.set_sp(v);
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.set_pc(v);
    }
    #[inline]
    fn set_status(&mut self, v: u8) {
        self.set_status(v);
    }

    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        self.advance_pc(delta);
    }

    #[inline]
    fn is_flag_set(&self, mask: u8) -> bool {
        self.is_flag_set(mask)
    }

    #[inline]
    fn assign_flag(&mut self, mask: u8, value: bool) {
        self.assign_flag(mask, value);
    }
}
