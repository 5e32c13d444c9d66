/*!
control_flow.rs - Control-flow / system opcodes and interrupt entry

Overview
========
Instructions that redirect PC through the stack or a vector:

  JMP abs        (0x4C)
  JMP (ind)      (0x6C)  (pointer page-wrap quirk applied by the resolver)
  JSR abs        (0x20)
  RTS            (0x60)
  RTI            (0x40)
  BRK            (0x00)

plus the three hardware entry sequences serviced by `dispatch::step` when the
interrupt latch is non-empty: RESET, NMI and IRQ.

Behavior Details
================
- JSR pushes (PC - 1), high byte then low, where PC is the address after the
  operand. RTS pulls it back and adds 1.
- RTI pulls P (BREAK dropped, unused bit set) then PC.
- BRK skips the padding byte, pushes PC, sets BREAK in P, pushes P and loads
  PC from $FFFE/$FFFF. The I flag is left as it was.
- NMI/IRQ push PC and P with BREAK cleared, clear DECIMAL and load their
  vector. IRQ also clears I, and is dropped at zero cost when I is set.
- RESET pushes nothing: A/X/Y cleared, S=$FF, P=Z|unused, PC from $FFFC/$FFFD.

Vectors
=======
  NMI   $FFFA/$FFFB
  RESET $FFFC/$FFFD
  IRQ   $FFFE/$FFFF (shared with BRK)
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{pop, pop_word, pulled_status, push, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{BREAK, DECIMAL, IRQ_DISABLE, RESET_STATUS};

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cost of every serviced interrupt entry.
pub(crate) const INTERRUPT_CYCLES: u32 = 7;

pub(crate) fn jmp<C: CpuRegs>(cpu: &mut C, operand: Operand) {
    if let Operand::Address(target) = operand {
        cpu.set_pc(target);
    }
}

pub(crate) fn jsr<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, operand: Operand) {
    let Operand::Address(target) = operand else {
        return;
    };
    let ret = cpu.pc().wrapping_sub(1);
    push_word(cpu, bus, ret);
    cpu.set_pc(target);
}

pub(crate) fn rts<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let ret = pop_word(cpu, bus);
    cpu.set_pc(ret.wrapping_add(1));
}

pub(crate) fn rti<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let p = pop(cpu, bus);
    cpu.set_status(pulled_status(p));
    let pc = pop_word(cpu, bus);
    cpu.set_pc(pc);
}

pub(crate) fn brk<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    cpu.advance_pc_one();
    let pc = cpu.pc();
    push_word(cpu, bus, pc);
    cpu.assign_flag(BREAK, true);
    let p = cpu.status();
    push(cpu, bus, p);
    cpu.set_pc(bus.read_word(IRQ_VECTOR));
}

// ---------------------------------------------------------------------------
// Interrupt entry
// ---------------------------------------------------------------------------

pub(crate) fn reset<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u32 {
    cpu.set_a(0);
    cpu.set_x(0);
    cpu.set_y(0);
    cpu.set_sp(0xFF);
    cpu.set_status(RESET_STATUS);
    let pc = bus.read_word(RESET_VECTOR);
    cpu.set_pc(pc);
    log::debug!("RESET -> PC={pc:04X}");
    INTERRUPT_CYCLES
}

pub(crate) fn nmi<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u32 {
    enter_interrupt(cpu, bus, NMI_VECTOR);
    log::trace!("NMI -> PC={:04X}", cpu.pc());
    INTERRUPT_CYCLES
}

pub(crate) fn irq<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u32 {
    if cpu.is_flag_set(IRQ_DISABLE) {
        log::debug!("IRQ dropped: interrupts disabled at PC={:04X}", cpu.pc());
        return 0;
    }
    enter_interrupt(cpu, bus, IRQ_VECTOR);
    cpu.assign_flag(IRQ_DISABLE, false);
    log::trace!("IRQ -> PC={:04X}", cpu.pc());
    INTERRUPT_CYCLES
}

/// Shared NMI/IRQ frame: PC high, PC low, P without BREAK; then D cleared and
/// PC loaded from `vector`.
fn enter_interrupt<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, vector: u16) {
    let pc = cpu.pc();
    push_word(cpu, bus, pc);
    let p = cpu.status_for_interrupt_push();
    push(cpu, bus, p);
    cpu.assign_flag(DECIMAL, false);
    cpu.set_pc(bus.read_word(vector));
}
