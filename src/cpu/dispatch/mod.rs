/*!
dispatch - Orchestrator for a single 6502 CPU step (interrupts / fetch / execute)

Overview
========
Coordinates one CPU step:
1. If the interrupt latch holds a request, run its entry sequence, clear the
   latch and return its cost (7, or 0 for a masked IRQ).
2. Otherwise fetch the opcode at PC, advance PC, seed the step cost from
   `BASE_CYCLES`, decode through `OPCODE_TABLE`, resolve the operand (which
   may add a page-cross cycle) and run the operation.

Architecture
============
- `step` owns the match on `Operation`. The match is exhaustive: a new
  operation variant without a handler does not compile.
- Family modules hold the handlers, grouped the way the instruction set
  groups them (load/store, arithmetic, logical, compare, rmw, branches,
  control flow, misc, undocumented). Handlers receive an already-resolved
  `Operand` and never touch the opcode byte.
- Cycle accounting happens in one place: `step` starts from the base cost,
  the resolver adds page-cross penalties and branch handlers return their
  taken / page-cross extras.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;
pub(crate) mod undocumented;

use crate::bus::CpuBus;
use crate::cpu::addressing::{fetch_byte, resolve};
use crate::cpu::cycles::base_cycles;
use crate::cpu::interrupt::PendingInterrupt;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::table::{Operation, decode};

/// Execute one CPU step (interrupt entry or one instruction) and return the
/// cycles consumed.
pub(crate) fn step<C: CpuRegs, B: CpuBus>(
    cpu: &mut C,
    pending: &mut PendingInterrupt,
    bus: &mut B,
) -> u32 {
    let interrupt = std::mem::take(pending);
    match interrupt {
        PendingInterrupt::Reset => return control_flow::reset(cpu, bus),
        PendingInterrupt::Nmi => return control_flow::nmi(cpu, bus),
        PendingInterrupt::Irq => return control_flow::irq(cpu, bus),
        PendingInterrupt::None => {}
    }

    let pc = cpu.pc();
    let opcode = fetch_byte(cpu, bus);
    let entry = decode(opcode);
    let mut cycles = base_cycles(opcode);
    let operand = resolve(entry.mode, cpu, bus, &mut cycles);

    log::trace!(
        "{pc:04X}  {opcode:02X}  {:<4} {:?}",
        entry.op.mnemonic(),
        operand
    );

    match entry.op {
        // Loads / stores
        Operation::Lda => load_store::lda(cpu, bus, operand),
        Operation::Ldx => load_store::ldx(cpu, bus, operand),
        Operation::Ldy => load_store::ldy(cpu, bus, operand),
        Operation::Sta => load_store::sta(cpu, bus, operand),
        Operation::Stx => load_store::stx(cpu, bus, operand),
        Operation::Sty => load_store::sty(cpu, bus, operand),

        // Arithmetic
        Operation::Adc => arithmetic::adc(cpu, bus, operand),
        Operation::Sbc => arithmetic::sbc(cpu, bus, operand),

        // Logical
        Operation::And => logical::and(cpu, bus, operand),
        Operation::Ora => logical::ora(cpu, bus, operand),
        Operation::Eor => logical::eor(cpu, bus, operand),
        Operation::Bit => logical::bit(cpu, bus, operand),

        // Compare
        Operation::Cmp => compare::cmp(cpu, bus, operand),
        Operation::Cpx => compare::cpx(cpu, bus, operand),
        Operation::Cpy => compare::cpy(cpu, bus, operand),

        // Read-modify-write
        Operation::Asl => rmw::asl(cpu, bus, operand),
        Operation::Lsr => rmw::lsr(cpu, bus, operand),
        Operation::Rol => rmw::rol(cpu, bus, operand),
        Operation::Ror => rmw::ror(cpu, bus, operand),
        Operation::Inc => rmw::inc(cpu, bus, operand),
        Operation::Dec => rmw::dec(cpu, bus, operand),
        Operation::Inx => misc::inx(cpu),
        Operation::Iny => misc::iny(cpu),
        Operation::Dex => misc::dex(cpu),
        Operation::Dey => misc::dey(cpu),

        // Branches
        Operation::Bpl => cycles += branches::on_flag(cpu, operand, NEGATIVE, false),
        Operation::Bmi => cycles += branches::on_flag(cpu, operand, NEGATIVE, true),
        Operation::Bvc => cycles += branches::on_flag(cpu, operand, OVERFLOW, false),
        Operation::Bvs => cycles += branches::on_flag(cpu, operand, OVERFLOW, true),
        Operation::Bcc => cycles += branches::on_flag(cpu, operand, CARRY, false),
        Operation::Bcs => cycles += branches::on_flag(cpu, operand, CARRY, true),
        Operation::Bne => cycles += branches::on_flag(cpu, operand, ZERO, false),
        Operation::Beq => cycles += branches::on_flag(cpu, operand, ZERO, true),

        // Control flow
        Operation::Jmp => control_flow::jmp(cpu, operand),
        Operation::Jsr => control_flow::jsr(cpu, bus, operand),
        Operation::Rts => control_flow::rts(cpu, bus),
        Operation::Rti => control_flow::rti(cpu, bus),
        Operation::Brk => control_flow::brk(cpu, bus),

        // Stack / transfers / flags
        Operation::Pha => misc::pha(cpu, bus),
        Operation::Php => misc::php(cpu, bus),
        Operation::Pla => misc::pla(cpu, bus),
        Operation::Plp => misc::plp(cpu, bus),
        Operation::Tax => misc::tax(cpu),
        Operation::Tay => misc::tay(cpu),
        Operation::Txa => misc::txa(cpu),
        Operation::Tya => misc::tya(cpu),
        Operation::Tsx => misc::tsx(cpu),
        Operation::Txs => misc::txs(cpu),
        Operation::Clc => misc::set_flag(cpu, CARRY, false),
        Operation::Sec => misc::set_flag(cpu, CARRY, true),
        Operation::Cli => misc::set_flag(cpu, IRQ_DISABLE, false),
        Operation::Sei => misc::set_flag(cpu, IRQ_DISABLE, true),
        Operation::Cld => misc::set_flag(cpu, DECIMAL, false),
        Operation::Sed => misc::set_flag(cpu, DECIMAL, true),
        Operation::Clv => misc::set_flag(cpu, OVERFLOW, false),
        Operation::Nop | Operation::Unassigned => {}

        // Undocumented
        Operation::Lax => undocumented::lax(cpu, bus, operand),
        Operation::Sax => undocumented::sax(cpu, bus, operand),
        Operation::Dcp => undocumented::dcp(cpu, bus, operand),
        Operation::Isc => undocumented::isc(cpu, bus, operand),
        Operation::Slo => undocumented::slo(cpu, bus, operand),
        Operation::Rla => undocumented::rla(cpu, bus, operand),
        Operation::Sre => undocumented::sre(cpu, bus, operand),
        Operation::Rra => undocumented::rra(cpu, bus, operand),
        Operation::Dop | Operation::Top => undocumented::skip(cpu, bus, operand),
    }

    cycles
}

#[cfg(test)]
mod tests {
    use crate::bus::CpuBus;
    use crate::cpu::interrupt::PendingInterrupt;
    use crate::cpu::state::IRQ_DISABLE;
    use crate::test_utils::setup_with_vectors;

    #[test]
    fn unassigned_opcode_is_a_timed_noop() {
        // $02 (KIL on silicon) and $1A (implied NOP variant)
        let (mut cpu, mut bus) = setup_with_vectors(&[0x02, 0x1A, 0xEA], None);
        let before = *cpu.state();
        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.a(), before.a());
        assert_eq!(cpu.status(), before.status());
        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn nmi_then_reset_services_reset() {
        let (mut cpu, mut bus) = setup_with_vectors(&[0xEA], Some((0x8000, 0x9000, 0xA000)));
        cpu.set_sp(0xF0);
        cpu.request_nmi();
        cpu.request_reset();
        assert_eq!(cpu.pending_interrupt(), PendingInterrupt::Reset);
        assert_eq!(cpu.step(&mut bus), 7);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.status(), 0x22);
        assert_eq!(cpu.pending_interrupt(), PendingInterrupt::None);
    }

    #[test]
    fn irq_while_nmi_pending_leaves_nmi_first() {
        let (mut cpu, mut bus) = setup_with_vectors(&[0xEA], Some((0x8000, 0x9000, 0xA000)));
        cpu.request_nmi();
        cpu.request_irq();
        assert_eq!(cpu.pending_interrupt(), PendingInterrupt::Nmi);
        assert_eq!(cpu.step(&mut bus), 7);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.pending_interrupt(), PendingInterrupt::None);
    }

    #[test]
    fn masked_irq_is_dropped_with_zero_cost() {
        let (mut cpu, mut bus) = setup_with_vectors(&[0xEA], Some((0x8000, 0x9000, 0xA000)));
        assert!(cpu.status() & IRQ_DISABLE != 0);
        let sp = cpu.sp();
        cpu.request_irq();
        assert_eq!(cpu.step(&mut bus), 0);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), sp);
        assert_eq!(cpu.pending_interrupt(), PendingInterrupt::None);
        // The next step executes the NOP normally.
        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.pc(), 0x8001);
    }

    #[test]
    fn absolute_y_page_cross_costs_one_more_for_reads_only() {
        // LDA $00F0,Y
        let (mut cpu, mut bus) = setup_with_vectors(&[0xB9, 0xF0, 0x00], None);
        cpu.set_y(0x01);
        let no_cross = cpu.step(&mut bus);
        cpu.set_pc(0x8000);
        cpu.set_y(0x20);
        let cross = cpu.step(&mut bus);
        assert_eq!(no_cross, 4);
        assert_eq!(cross, no_cross + 1);

        // STA $00F0,Y has a fixed cost.
        let (mut cpu, mut bus) = setup_with_vectors(&[0x99, 0xF0, 0x00], None);
        cpu.set_a(0x77);
        cpu.set_y(0x01);
        let no_cross = cpu.step(&mut bus);
        cpu.set_pc(0x8000);
        cpu.set_y(0x20);
        let cross = cpu.step(&mut bus);
        assert_eq!(no_cross, 5);
        assert_eq!(cross, 5);
        assert_eq!(bus.read(0x00F1), 0x77);
        assert_eq!(bus.read(0x0110), 0x77);
    }
}
