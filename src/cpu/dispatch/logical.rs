/*!
logical.rs - AND / ORA / EOR / BIT opcode family

AND: 29, 25, 35, 2D, 3D*, 39*, 21, 31*
ORA: 09, 05, 15, 0D, 1D*, 19*, 01, 11*
EOR: 49, 45, 55, 4D, 5D*, 59*, 41, 51*
BIT: 24, 2C

AND/ORA/EOR store into A and set Z/N from it. BIT leaves A untouched: Z from
A & M, N and V copied from bits 7 and 6 of M.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, read_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn and<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::and(cpu, v);
}

pub(crate) fn ora<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::ora(cpu, v);
}

pub(crate) fn eor<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::eor(cpu, v);
}

pub(crate) fn bit<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::bit(cpu, v);
}
