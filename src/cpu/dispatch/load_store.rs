/*!
load_store.rs - Load / Store opcode family

Loads (set Z/N flags; read variants of indexed modes carry the page-cross penalty):
    LDA: A9, A5, B5, AD, BD*, B9*, A1, B1*
    LDX: A2, A6, B6, AE, BE*
    LDY: A0, A4, B4, AC, BC*

Stores (no flags changed, fixed cost):
    STA: 85, 95, 8D, 9D, 99, 81, 91
    STX: 86, 96, 8E
    STY: 84, 94, 8C
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, read_operand, write_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn lda<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::lda(cpu, v);
}

pub(crate) fn ldx<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::ldx(cpu, v);
}

pub(crate) fn ldy<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::ldy(cpu, v);
}

pub(crate) fn sta<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = cpu.a();
    write_operand(cpu, bus, operand, v);
}

pub(crate) fn stx<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = cpu.x();
    write_operand(cpu, bus, operand, v);
}

pub(crate) fn sty<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = cpu.y();
    write_operand(cpu, bus, operand, v);
}

#[cfg(test)]
mod tests {
    use crate::bus::CpuBus;
    use crate::cpu::state::{NEGATIVE, ZERO};
    use crate::test_utils::setup;

    #[test]
    fn lda_immediate_sets_flags() {
        let (mut cpu, mut bus) = setup(&[0xA9, 0x00, 0xA9, 0x80]);
        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.status() & ZERO != 0);
        cpu.step(&mut bus);
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.status() & NEGATIVE != 0);
        assert!(cpu.status() & ZERO == 0);
        assert_eq!(cpu.pc(), 0x8004);
    }

    #[test]
    fn zero_page_x_wraps_within_page_zero() {
        // LDX #$10 ; LDA $F8,X -> reads $0008
        let (mut cpu, mut bus) = setup(&[0xA2, 0x10, 0xB5, 0xF8]);
        bus.write(0x0008, 0x42);
        bus.write(0x0108, 0x99);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.a(), 0x42);
    }

    #[test]
    fn ldx_zero_page_y_and_ldy_absolute_x_penalty() {
        // LDY #$05 ; LDX $10,Y ; LDX #$FF ; LDY $0201,X
        let (mut cpu, mut bus) = setup(&[0xA0, 0x05, 0xB6, 0x10, 0xA2, 0xFF, 0xBC, 0x01, 0x02]);
        bus.write(0x0015, 0x33);
        bus.write(0x0300, 0x44);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.x(), 0x33);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 5);
        assert_eq!(cpu.y(), 0x44);
    }

    #[test]
    fn stores_leave_flags_alone() {
        // LDX #$7F ; LDA #$00 (sets Z) ; STX $10 ; STA $0200 ; STY $11
        let (mut cpu, mut bus) = setup(&[
            0xA2, 0x7F, 0xA9, 0x00, 0x86, 0x10, 0x8D, 0x00, 0x02, 0x84, 0x11,
        ]);
        for _ in 0..2 {
            cpu.step(&mut bus);
        }
        let p = cpu.status();
        assert_eq!(cpu.step(&mut bus), 3);
        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.step(&mut bus), 3);
        assert_eq!(bus.read(0x0010), 0x7F);
        assert_eq!(bus.read(0x0200), 0x00);
        assert_eq!(bus.read(0x0011), cpu.y());
        assert_eq!(cpu.status(), p);
    }

    #[test]
    fn indirect_modes_fetch_pointer_from_zero_page() {
        // LDX #$04 ; LDA ($20,X) ; LDY #$10 ; STA ($30),Y
        let (mut cpu, mut bus) = setup(&[0xA2, 0x04, 0xA1, 0x20, 0xA0, 0x10, 0x91, 0x30]);
        bus.write(0x0024, 0x00);
        bus.write(0x0025, 0x03);
        bus.write(0x0300, 0x5A);
        bus.write(0x0030, 0xF8);
        bus.write(0x0031, 0x03);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 6);
        assert_eq!(cpu.a(), 0x5A);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 6);
        assert_eq!(bus.read(0x0408), 0x5A);
    }
}
