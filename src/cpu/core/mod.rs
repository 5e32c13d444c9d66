/*!
core::Cpu - 6502 CPU façade wrapping `CpuState`.

Design
======
- `Cpu` owns the register file (`CpuState`), the single-slot interrupt latch
  and the cycle counters. It is generic over nothing: the bus is passed to
  each call as `&mut impl CpuBus`, so the same CPU drives the NES `Bus` or any
  other memory map.
- `step` services a latched interrupt or executes one instruction and returns
  the cycles it took. The same value stays readable through `cycles()` until
  the next step; `total_cycles()` is the running sum since construction.
- `request_reset` / `request_nmi` / `request_irq` only update the latch; the
  effect is visible at the next `step`.

Driver surface
==============
Register accessors and setters let a harness seed an arbitrary start state,
e.g. the automated CPU test ROM entry (PC=$C000, S=$FD, P=$24).
*/

use crate::bus::CpuBus;
use crate::cpu::dispatch;
use crate::cpu::dispatch::control_flow::RESET_VECTOR;
use crate::cpu::interrupt::PendingInterrupt;
use crate::cpu::state::{CpuState, POWER_ON_STATUS};

/// Cycles charged by `power_on`.
pub const POWER_ON_CYCLES: u32 = 7;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    pending: PendingInterrupt,
    cycles: u32,
    total_cycles: u64,
}

impl Cpu {
    /// Construct a new CPU with power‑up register defaults. PC is 0 until
    /// `power_on` reads the reset vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Power-on sequence: A=X=Y=0, S=$FF, P=B|unused|I, PC from $FFFC/$FFFD.
    /// Charges 7 cycles. A request latched before power-on stays pending.
    pub fn power_on<B: CpuBus>(&mut self, bus: &mut B) {
        self.state = CpuState {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: bus.read_word(RESET_VECTOR),
            status: POWER_ON_STATUS,
        };
        self.cycles = POWER_ON_CYCLES;
        self.total_cycles += u64::from(POWER_ON_CYCLES);
        log::debug!("CPU power-on: PC={:04X}", self.state.pc);
    }

    pub fn request_reset(&mut self) {
        self.request(PendingInterrupt::Reset);
    }

    pub fn request_nmi(&mut self) {
        self.request(PendingInterrupt::Nmi);
    }

    pub fn request_irq(&mut self) {
        self.request(PendingInterrupt::Irq);
    }

    fn request(&mut self, incoming: PendingInterrupt) {
        let next = self.pending.request(incoming);
        if next != incoming {
            log::trace!("{incoming:?} request ignored, {next:?} already latched");
        }
        self.pending = next;
    }

    /// Interrupt latched for the next step.
    pub fn pending_interrupt(&self) -> PendingInterrupt {
        self.pending
    }

    /// Execute one step (interrupt entry or instruction); returns its cycles.
    pub fn step<B: CpuBus>(&mut self, bus: &mut B) -> u32 {
        let cycles = dispatch::step(&mut self.state, &mut self.pending, bus);
        self.cycles = cycles;
        self.total_cycles += u64::from(cycles);
        cycles
    }

    /// Run `max_steps` steps; returns the cycles they consumed.
    pub fn run<B: CpuBus>(&mut self, bus: &mut B, max_steps: usize) -> u64 {
        (0..max_steps).map(|_| u64::from(self.step(bus))).sum()
    }

    /// Cycles consumed by the most recent step (or power-on).
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Cycles consumed since construction.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.status = v;
    }

    /// True if every bit of `mask` is set in P.
    pub fn flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }
}
