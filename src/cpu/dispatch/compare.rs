/*!
compare.rs - Compare opcode family (CMP / CPX / CPY)

Opcodes
=======
CMP: C9, C5, D5, CD, DD*, D9*, C1, D1*
CPX: E0, E4, EC
CPY: C0, C4, CC

Flag semantics
==============
C = register >= M
Z = register == M
N = bit 7 of (register - M)
Registers are left unchanged.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{compare, read_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn cmp<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let a = cpu.a();
    compare(cpu, a, v);
}

pub(crate) fn cpx<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let x = cpu.x();
    compare(cpu, x, v);
}

pub(crate) fn cpy<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    let y = cpu.y();
    compare(cpu, y, v);
}
