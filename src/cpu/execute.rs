/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Side-effect logic shared by the opcode families in `dispatch`. Every helper is
generic over `CpuRegs` (register file) and, where memory is involved, over
`CpuBus`, so the same code runs against the NES `Bus` and the flat test memory.

Scope (crate-visible)
---------------------
Stack:
    push, pop, push_word, pop_word
    php, plp, pha, pla

Operand access:
    read_operand, write_operand, modify

Registers / ALU:
    lda/ldx/ldy, tax/tay/txa/tya/tsx/txs
    and/ora/eor/bit
    inx/iny/dex/dey
    adc/sbc, compare

Shifts / rotates:
    asl/lsr/rol/ror are pure value transforms that only set CARRY. Callers
    pair them with `modify`, which handles accumulator vs. memory operands and
    the final ZERO/NEGATIVE update.

Branches:
    branch

Stack page
==========
The stack lives at $0100-$01FF. `push` writes to $0100|S then decrements S;
`pop` increments S then reads. S wraps modulo 256 in both directions.

Status byte on the stack
========================
PHP pushes P with BREAK set. PLP and RTI load P with BREAK cleared and the
unused bit forced on.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{BREAK, CARRY, NEGATIVE, OVERFLOW, UNUSED, ZERO};

pub(crate) const STACK_BASE: u16 = 0x0100;

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn push<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, v: u8) {
    let sp = cpu.sp();
    bus.write(STACK_BASE | sp as u16, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read(STACK_BASE | sp as u16)
}

/// Push high byte first so the word reads little-endian from the stack.
#[inline]
pub(crate) fn push_word<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, v: u16) {
    push(cpu, bus, (v >> 8) as u8);
    push(cpu, bus, (v & 0xFF) as u8);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = pop(cpu, bus) as u16;
    let hi = pop(cpu, bus) as u16;
    (hi << 8) | lo
}

#[inline]
pub(crate) fn php<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let p = cpu.status() | BREAK;
    push(cpu, bus, p);
}

/// Pull P: BREAK dropped, unused bit forced on.
#[inline]
pub(crate) fn plp<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let v = pop(cpu, bus);
    cpu.set_status(pulled_status(v));
}

#[inline]
pub(crate) fn pulled_status(v: u8) -> u8 {
    (v & !BREAK) | UNUSED
}

#[inline]
pub(crate) fn pha<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let v = pop(cpu, bus);
    lda(cpu, v);
}

// ---------------------------------------------------------------------------
// Operand access
// ---------------------------------------------------------------------------

/// Value named by a resolved operand. Implied operands read as 0.
#[inline]
pub(crate) fn read_operand<C: CpuRegs, B: CpuBus>(cpu: &C, bus: &mut B, operand: Operand) -> u8 {
    match operand {
        Operand::Address(addr) => bus.read(addr),
        Operand::Accumulator => cpu.a(),
        Operand::Implied => 0,
    }
}

#[inline]
pub(crate) fn write_operand<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    bus: &mut B,
    operand: Operand,
    v: u8,
) {
    match operand {
        Operand::Address(addr) => bus.write(addr, v),
        Operand::Accumulator => cpu.set_a(v),
        Operand::Implied => {}
    }
}

/// Read-modify-write: read the operand, apply `f`, write the result back and
/// update ZERO/NEGATIVE from it. Returns the written value.
pub(crate) fn modify<C, B, F>(cpu: &mut C, bus: &mut B, operand: Operand, f: F) -> u8
where
    C: CpuRegs,
    B: CpuBus,
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = read_operand(cpu, bus, operand);
    let new = f(cpu, old);
    write_operand(cpu, bus, operand, new);
    cpu.update_zn(new);
    new
}

// ---------------------------------------------------------------------------
// Loads / transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.sp();
    ldx(cpu, v);
}

/// TXS touches no flags.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    cpu.set_sp(v);
}

// ---------------------------------------------------------------------------
// Logical / BIT
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    lda(cpu, r);
}

/// ZERO from A & M; NEGATIVE and OVERFLOW copied from bits 7 and 6 of M.
#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    cpu.assign_flag(ZERO, a & v == 0);
    cpu.assign_flag(NEGATIVE, v & 0x80 != 0);
    cpu.assign_flag(OVERFLOW, v & 0x40 != 0);
}

// ---------------------------------------------------------------------------
// Register increment / decrement
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    ldy(cpu, v);
}

// ---------------------------------------------------------------------------
// ADC / SBC / compare
// ---------------------------------------------------------------------------

/// Binary add with carry. DECIMAL is ignored on the 2A03.
#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let carry_in = cpu.is_flag_set(CARRY) as u16;
    let sum = a as u16 + v as u16 + carry_in;
    let result = sum as u8;

    cpu.update_carry(sum > 0xFF);
    // Overflow: operands share a sign that the result does not.
    cpu.update_overflow((!(a ^ v) & (a ^ result) & 0x80) != 0);
    lda(cpu, result);
}

/// A - M - (1 - C), expressed as ADC of the one's complement.
#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, v ^ 0xFF);
}

/// CMP/CPX/CPY: CARRY = reg >= v, ZERO/NEGATIVE from reg - v.
#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    cpu.update_carry(reg >= v);
    cpu.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Shifts / rotates (value transforms; caller updates Z/N)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.update_carry(v & 0x80 != 0);
    v << 1
}

#[inline]
pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.update_carry(v & 0x01 != 0);
    v >> 1
}

#[inline]
pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.is_flag_set(CARRY) as u8;
    cpu.update_carry(v & 0x80 != 0);
    (v << 1) | carry_in
}

#[inline]
pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = if cpu.is_flag_set(CARRY) { 0x80 } else { 0 };
    cpu.update_carry(v & 0x01 != 0);
    (v >> 1) | carry_in
}

// ---------------------------------------------------------------------------
// Branches
// ---------------------------------------------------------------------------

/// Take or skip a relative branch whose target is already resolved.
/// Returns the extra cycles: 0 not taken, 1 taken, 2 taken across a page.
#[inline]
pub(crate) fn branch<C: CpuRegs>(cpu: &mut C, take: bool, target: u16) -> u32 {
    if !take {
        return 0;
    }
    let from = cpu.pc();
    cpu.set_pc(target);
    if (from & 0xFF00) != (target & 0xFF00) {
        2
    } else {
        1
    }
}
