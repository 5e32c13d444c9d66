/*!
branches.rs - Relative branch opcodes (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Overview
========
The resolver has already consumed the displacement and produced the target as
`Operand::Address`. This module tests the flag and, if taken, moves PC there.

Cycle Rules
===========
Base cost: 2 cycles.
If branch is taken: +1 cycle.
If branch is taken and target lies in a different page than the instruction
following the branch: +2 total (vs base).

The extra cycles are returned to the dispatcher, which adds them to the step.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::branch;
use crate::cpu::regs::CpuRegs;

/// Branch when `flag` is set (`when_set`) or clear (`!when_set`).
/// Returns the extra cycles consumed.
pub(crate) fn on_flag<C: CpuRegs>(cpu: &mut C, operand: Operand, flag: u8, when_set: bool) -> u32 {
    let Operand::Address(target) = operand else {
        return 0;
    };
    let take = cpu.is_flag_set(flag) == when_set;
    branch(cpu, take, target)
}
