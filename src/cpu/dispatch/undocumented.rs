/*!
undocumented.rs - Stable undocumented opcodes

Opcodes
=======
LAX  A7 B7 AF BF A3 B3*    A = X = M
SAX  87 97 8F 83           M = A & X (no flags)
DCP  C7 D7 CF DF DB C3 D3  DEC M, then CMP
ISB  E7 F7 EF FF FB E3 F3  INC M, then SBC
SLO  07 17 0F 1F 1B 03 13  ASL M, then ORA
RLA  27 37 2F 3F 3B 23 33  ROL M, then AND
SRE  47 57 4F 5F 5B 43 53  LSR M, then EOR
RRA  67 77 6F 7F 7B 63 73  ROR M, then ADC
DOP  04 44 64 14 34 54 74 D4 F4 80 82 89 C2 E2   read and discard
TOP  0C 1C* 3C* 5C* 7C* DC* FC*                  read and discard

(*) +1 cycle on page cross.

The combined forms write the modified byte back before the second step runs;
Z/N (and V for ISB/RRA) come from the second step, C from whichever step sets
it last.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, modify, read_operand, write_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn lax<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    cpu.set_x(v);
    execute::lda(cpu, v);
}

pub(crate) fn sax<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = cpu.a() & cpu.x();
    write_operand(cpu, bus, operand, v);
}

pub(crate) fn dcp<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let m = modify(cpu, bus, operand, |_, v| v.wrapping_sub(1));
    let a = cpu.a();
    execute::compare(cpu, a, m);
}

pub(crate) fn isc<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let m = modify(cpu, bus, operand, |_, v| v.wrapping_add(1));
    execute::sbc(cpu, m);
}

pub(crate) fn slo<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let m = modify(cpu, bus, operand, |c, v| execute::asl(c, v));
    execute::ora(cpu, m);
}

pub(crate) fn rla<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let m = modify(cpu, bus, operand, |c, v| execute::rol(c, v));
    execute::and(cpu, m);
}

pub(crate) fn sre<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let m = modify(cpu, bus, operand, |c, v| execute::lsr(c, v));
    execute::eor(cpu, m);
}

pub(crate) fn rra<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let m = modify(cpu, bus, operand, |c, v| execute::ror(c, v));
    execute::adc(cpu, m);
}

/// DOP/TOP: the operand is read and discarded.
pub(crate) fn skip<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let _ = read_operand(cpu, bus, operand);
}

#[cfg(test)]
mod tests {
    use crate::bus::CpuBus;
    use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};
    use crate::test_utils::setup;

    #[test]
    fn lax_loads_a_and_x() {
        // LAX $10 ; LDY #$01 ; LAX ($20),Y
        let (mut cpu, mut bus) = setup(&[0xA7, 0x10, 0xA0, 0x01, 0xB3, 0x20]);
        bus.write(0x0010, 0x80);
        bus.write(0x0020, 0xFF);
        bus.write(0x0021, 0x02);
        bus.write(0x0300, 0x00);
        assert_eq!(cpu.step(&mut bus), 3);
        assert_eq!((cpu.a(), cpu.x()), (0x80, 0x80));
        assert!(cpu.status() & NEGATIVE != 0);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 6);
        assert_eq!((cpu.a(), cpu.x()), (0x00, 0x00));
        assert!(cpu.status() & ZERO != 0);
    }

    #[test]
    fn lax_absolute_y_has_fixed_cost() {
        // LDY #$20 ; LAX $00F0,Y
        let (mut cpu, mut bus) = setup(&[0xA0, 0x20, 0xBF, 0xF0, 0x00]);
        bus.write(0x0110, 0x11);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.x(), 0x11);
    }

    #[test]
    fn sax_stores_a_and_x_without_flags() {
        // LDA #$F0 ; LDX #$3C ; SAX $10
        let (mut cpu, mut bus) = setup(&[0xA9, 0xF0, 0xA2, 0x3C, 0x87, 0x10]);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        let p = cpu.status();
        assert_eq!(cpu.step(&mut bus), 3);
        assert_eq!(bus.read(0x0010), 0x30);
        assert_eq!(cpu.status(), p);
    }

    #[test]
    fn dcp_decrements_then_compares() {
        // LDA #$40 ; DCP $10
        let (mut cpu, mut bus) = setup(&[0xA9, 0x40, 0xC7, 0x10]);
        bus.write(0x0010, 0x41);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 5);
        assert_eq!(bus.read(0x0010), 0x40);
        assert!(cpu.status() & ZERO != 0);
        assert!(cpu.status() & CARRY != 0);
        assert_eq!(cpu.a(), 0x40);
    }

    #[test]
    fn isc_increments_then_subtracts() {
        // SEC ; LDA #$10 ; ISB $10
        let (mut cpu, mut bus) = setup(&[0x38, 0xA9, 0x10, 0xE7, 0x10]);
        bus.write(0x0010, 0x0F);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        assert_eq!(bus.read(0x0010), 0x10);
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.status() & ZERO != 0);
        assert!(cpu.status() & CARRY != 0);
    }

    #[test]
    fn slo_and_rla() {
        // LDA #$01 ; SLO $10 ; RLA $11
        let (mut cpu, mut bus) = setup(&[0xA9, 0x01, 0x07, 0x10, 0x27, 0x11]);
        bus.write(0x0010, 0x81);
        bus.write(0x0011, 0x7F);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        assert_eq!(bus.read(0x0010), 0x02);
        assert_eq!(cpu.a(), 0x03);
        assert!(cpu.status() & CARRY != 0);
        cpu.step(&mut bus);
        // ROL $7F with C=1 -> $FF ; A = $03 & $FF
        assert_eq!(bus.read(0x0011), 0xFF);
        assert_eq!(cpu.a(), 0x03);
        assert!(cpu.status() & CARRY == 0);
    }

    #[test]
    fn sre_takes_flags_from_accumulator() {
        // LDA #$80 ; SRE $10
        let (mut cpu, mut bus) = setup(&[0xA9, 0x80, 0x47, 0x10]);
        bus.write(0x0010, 0x01);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        assert_eq!(bus.read(0x0010), 0x00);
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.status() & NEGATIVE != 0);
        assert!(cpu.status() & ZERO == 0);
        assert!(cpu.status() & CARRY != 0);
    }

    #[test]
    fn rra_rotates_then_adds_with_rotated_carry() {
        // CLC ; LDA #$70 ; RRA $10   ($21 -> $10, C=1 ; $70 + $10 + 1)
        let (mut cpu, mut bus) = setup(&[0x18, 0xA9, 0x70, 0x67, 0x10]);
        bus.write(0x0010, 0x21);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        assert_eq!(bus.read(0x0010), 0x10);
        assert_eq!(cpu.a(), 0x81);
        assert!(cpu.status() & OVERFLOW != 0);
        assert!(cpu.status() & CARRY == 0);
    }

    #[test]
    fn dop_and_top_skip_operands() {
        // DOP #$FF ; DOP $10 ; TOP $0300 ; LDX #$01 ; TOP $02FF,X
        let (mut cpu, mut bus) = setup(&[
            0x80, 0xFF, 0x04, 0x10, 0x0C, 0x00, 0x03, 0xA2, 0x01, 0x1C, 0xFF, 0x02,
        ]);
        let a = cpu.a();
        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.pc(), 0x8002);
        assert_eq!(cpu.step(&mut bus), 3);
        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.pc(), 0x8007);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 5);
        assert_eq!(cpu.pc(), 0x800C);
        assert_eq!(cpu.a(), a);
    }
}
