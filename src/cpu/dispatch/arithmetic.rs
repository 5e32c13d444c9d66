/*!
arithmetic.rs - ADC / SBC opcode family

Opcodes
=======
ADC: 69, 65, 75, 6D, 7D*, 79*, 61, 71*
SBC: E9, E5, F5, ED, FD*, F9*, E1, F1*  (+ undocumented EB = SBC #imm)

(*) read variants: +1 cycle on page cross, applied by the resolver.

Flags
=====
C: carry out of bit 7 (ADC) / no borrow (SBC)
V: signed overflow
Z/N: from the 8-bit result
Decimal mode is not implemented on the 2A03; D is ignored.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{self, read_operand};
use crate::cpu::regs::CpuRegs;

pub(crate) fn adc<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::adc(cpu, v);
}

pub(crate) fn sbc<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let v = read_operand(cpu, bus, operand);
    execute::sbc(cpu, v);
}
