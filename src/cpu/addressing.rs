/*!
addressing.rs - 6502 addressing modes and operand resolution.

Overview
========
`AddressingMode` names the thirteen operand-location algorithms. `resolve`
consumes the operand bytes that follow the opcode (advancing PC as it reads)
and yields an `Operand`:
- `Operand::Implied` / `Operand::Accumulator` for modes without an address
- `Operand::Address(ea)` for everything else (Immediate yields the address of
  the immediate byte itself; Relative yields the branch target)

Page-cross penalties
====================
Absolute,X / Absolute,Y / (Indirect),Y carry a `penalty` switch. When set,
`resolve` adds one cycle if the indexed address lands in a different page than
the base address. Write-only and read-modify-write opcodes use the
non-penalty variant because their table cost already covers the fix-up cycle.

The branch-taken penalty is applied by the branch operation, not here.

JMP (indirect)
==============
`Indirect { page_wrap: true }` reproduces the 6502 pointer fetch bug: when the
pointer's low byte is $FF the high byte is read from the start of the same page.
*/

use crate::bus::CpuBus;
use crate::cpu::regs::CpuRegs;

/// Operand-location algorithm of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX { penalty: bool },
    AbsoluteY { penalty: bool },
    Relative,
    IndirectX,
    IndirectY { penalty: bool },
    Indirect { page_wrap: bool },
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            Self::Implied | Self::Accumulator => 0,
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::Relative
            | Self::IndirectX
            | Self::IndirectY { .. } => 1,
            Self::Absolute
            | Self::AbsoluteX { .. }
            | Self::AbsoluteY { .. }
            | Self::Indirect { .. } => 2,
        }
    }
}

/// Result of operand resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Implied,
    Accumulator,
    Address(u16),
}

/// Resolve `mode` at the current PC. Adds any page-cross penalty to `cycles`.
pub(crate) fn resolve<C: CpuRegs, B: CpuBus>(
    mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
    cycles: &mut u32,
) -> Operand {
    let ea = match mode {
        AddressingMode::Implied => return Operand::Implied,
        AddressingMode::Accumulator => return Operand::Accumulator,
        AddressingMode::Immediate => {
            let pc = cpu.pc();
            cpu.advance_pc_one();
            pc
        }
        AddressingMode::ZeroPage => addr_zp(cpu, bus),
        AddressingMode::ZeroPageX => addr_zp_x(cpu, bus),
        AddressingMode::ZeroPageY => addr_zp_y(cpu, bus),
        AddressingMode::Absolute => fetch_word(cpu, bus),
        AddressingMode::AbsoluteX { penalty } => {
            let (addr, crossed) = addr_abs_x(cpu, bus);
            add_page_cross_penalty(cycles, penalty && crossed);
            addr
        }
        AddressingMode::AbsoluteY { penalty } => {
            let (addr, crossed) = addr_abs_y(cpu, bus);
            add_page_cross_penalty(cycles, penalty && crossed);
            addr
        }
        AddressingMode::Relative => addr_relative(cpu, bus),
        AddressingMode::IndirectX => addr_ind_x(cpu, bus),
        AddressingMode::IndirectY { penalty } => {
            let (addr, crossed) = addr_ind_y(cpu, bus);
            add_page_cross_penalty(cycles, penalty && crossed);
            addr
        }
        AddressingMode::Indirect { page_wrap } => {
            let ptr = fetch_word(cpu, bus);
            if page_wrap {
                read_word_indirect_bug(bus, ptr)
            } else {
                bus.read_word(ptr)
            }
        }
    };
    Operand::Address(ea)
}

#[inline]
fn add_page_cross_penalty(cycles: &mut u32, crossed: bool) {
    if crossed {
        *cycles += 1;
    }
}

/// Fetch next byte from the instruction stream, incrementing PC.
pub(crate) fn fetch_byte<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u8 {
    let v = bus.read(cpu.pc());
    cpu.advance_pc_one();
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
pub(crate) fn fetch_word<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = fetch_byte(cpu, bus) as u16;
    let hi = fetch_byte(cpu, bus) as u16;
    (hi << 8) | lo
}

// -------------------------
// Address helpers
// -------------------------

#[inline]
fn addr_zp<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    fetch_byte(cpu, bus) as u16
}

#[inline]
fn addr_zp_x<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    fetch_byte(cpu, bus).wrapping_add(cpu.x()) as u16
}

#[inline]
fn addr_zp_y<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    fetch_byte(cpu, bus).wrapping_add(cpu.y()) as u16
}

#[inline]
fn addr_abs_x<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> (u16, bool) {
    let base = fetch_word(cpu, bus);
    indexed(base, cpu.x())
}

#[inline]
fn addr_abs_y<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> (u16, bool) {
    let base = fetch_word(cpu, bus);
    indexed(base, cpu.y())
}

#[inline]
fn addr_ind_x<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
    read_word_zp(bus, zp)
}

#[inline]
fn addr_ind_y<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> (u16, bool) {
    let zp = fetch_byte(cpu, bus);
    let base = read_word_zp(bus, zp);
    indexed(base, cpu.y())
}

/// Signed displacement relative to the PC after the operand byte.
#[inline]
fn addr_relative<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    let offset = fetch_byte(cpu, bus) as i8;
    cpu.pc().wrapping_add_signed(offset as i16)
}

/// Base + index with 16-bit wraparound, and whether the high byte changed.
#[inline]
fn indexed(base: u16, index: u8) -> (u16, bool) {
    let addr = base.wrapping_add(index as u16);
    (addr, (base & 0xFF00) != (addr & 0xFF00))
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Read a little-endian pointer from zero page; the high byte wraps within page zero.
#[inline]
pub(crate) fn read_word_zp<B: CpuBus>(bus: &mut B, base: u8) -> u16 {
    let lo = bus.read(base as u16) as u16;
    let hi = bus.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP (indirect) pointer fetch: the high byte never carries into the next page.
#[inline]
pub(crate) fn read_word_indirect_bug<B: CpuBus>(bus: &mut B, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}
