/*!
misc.rs - Transfers / stack / flag / register inc-dec opcodes

Opcodes
=======
Transfers: TAX AA, TAY A8, TXA 8A, TYA 98, TSX BA, TXS 9A
Stack:     PHA 48, PHP 08, PLA 68, PLP 28
Flags:     CLC 18, SEC 38, CLI 58, SEI 78, CLV B8, CLD D8, SED F8
Inc/Dec:   INX E8, INY C8, DEX CA, DEY 88

All are single-byte implied instructions with fixed cost. Every transfer except
TXS updates Z/N from the destination.
*/

use crate::bus::CpuBus;
use crate::cpu::execute;
use crate::cpu::regs::CpuRegs;

pub(crate) use crate::cpu::execute::{dex, dey, inx, iny, tax, tay, tsx, txa, txs, tya};

pub(crate) fn pha<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    execute::pha(cpu, bus);
}

pub(crate) fn php<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    execute::php(cpu, bus);
}

pub(crate) fn pla<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    execute::pla(cpu, bus);
}

pub(crate) fn plp<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    execute::plp(cpu, bus);
}

/// SEC/CLC/SEI/CLI/SED/CLD/CLV: touch exactly one bit.
#[inline]
pub(crate) fn set_flag<C: CpuRegs>(cpu: &mut C, mask: u8, on: bool) {
    cpu.assign_flag(mask, on);
}
