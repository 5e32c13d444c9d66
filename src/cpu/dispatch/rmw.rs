/*!
rmw.rs - Read-Modify-Write / shift family

Opcodes
=======
ASL: 0A (A), 06, 16, 0E, 1E
LSR: 4A (A), 46, 56, 4E, 5E
ROL: 2A (A), 26, 36, 2E, 3E
ROR: 6A (A), 66, 76, 6E, 7E
INC: E6, F6, EE, FE
DEC: C6, D6, CE, DE

Shifts and rotates accept either `Operand::Accumulator` or a memory address;
`execute::modify` picks the target. C receives the bit shifted out, Z/N come
from the written value. INC/DEC leave C alone.

Timing
======
The abs,X forms use the non-penalty resolver variant; their table cost already
includes the fix-up cycle.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, modify};
use crate::cpu::regs::CpuRegs;

pub(crate) fn asl<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify(cpu, bus, operand, |c, v| execute::asl(c, v));
}

pub(crate) fn lsr<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify(cpu, bus, operand, |c, v| execute::lsr(c, v));
}

pub(crate) fn rol<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify(cpu, bus, operand, |c, v| execute::rol(c, v));
}

pub(crate) fn ror<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify(cpu, bus, operand, |c, v| execute::ror(c, v));
}

pub(crate) fn inc<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify(cpu, bus, operand, |_, v| v.wrapping_add(1));
}

pub(crate) fn dec<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    modify(cpu, bus, operand, |_, v| v.wrapping_sub(1));
}
