//! Trace lines in the shape of the published CPU test ROM log.
//!
//! Each line captures the CPU registers *before* an instruction executes, plus
//! the PPU dot column derived from the cycles consumed so far:
//!
//! ```text
//! C000    A:00 X:00 Y:00 P:24 SP:FD CYC:  0
//! ```
//!
//! Reference logs carry disassembly and a scanline column as well;
//! [`reference_line`] strips a reference line down to the same fields so the
//! two can be compared as plain strings.

use std::fmt;

use crate::bus::CpuBus;
use crate::cpu::Cpu;

/// PPU dots per scanline.
pub const DOTS_PER_SCANLINE: u32 = 341;
/// PPU dots per CPU cycle.
pub const DOTS_PER_CPU_CYCLE: u32 = 3;

/// Register snapshot plus PPU dot column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine {
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub sp: u8,
    pub dot: u32,
}

impl TraceLine {
    pub fn capture(cpu: &Cpu, dot: u32) -> Self {
        Self {
            pc: cpu.pc(),
            a: cpu.a(),
            x: cpu.x(),
            y: cpu.y(),
            p: cpu.status(),
            sp: cpu.sp(),
            dot,
        }
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X}    A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{:>3}",
            self.pc, self.a, self.x, self.y, self.p, self.sp, self.dot
        )
    }
}

/// Running PPU dot column: `dot = (dot + cpu_cycles * 3) mod 341`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PpuDotCounter {
    dot: u32,
}

impl PpuDotCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dot(&self) -> u32 {
        self.dot
    }

    /// Advance by `cpu_cycles` and return the new column.
    pub fn advance(&mut self, cpu_cycles: u32) -> u32 {
        self.dot = (self.dot + cpu_cycles * DOTS_PER_CPU_CYCLE) % DOTS_PER_SCANLINE;
        self.dot
    }
}

/// Produces one trace line per CPU step.
#[derive(Debug, Default)]
pub struct Tracer {
    dots: PpuDotCounter,
    last_cycles: u32,
}

impl Tracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the pre-step line, then step the CPU once.
    pub fn step<B: CpuBus>(&mut self, cpu: &mut Cpu, bus: &mut B) -> TraceLine {
        let dot = self.dots.advance(self.last_cycles);
        let line = TraceLine::capture(cpu, dot);
        self.last_cycles = cpu.step(bus);
        line
    }
}

/// Reduce a reference log line to `PC + 4 spaces + "A:.. CYC:nnn"`.
///
/// Returns `None` when the line is too short or lacks the `A:` / ` SL` markers.
pub fn reference_line(line: &str) -> Option<String> {
    let pc = line.get(0..4)?;
    let start = line.find("A:")?;
    let end = line.find(" SL")?;
    let regs = line.get(start..end)?;
    Some(format!("{pc}    {regs}"))
}
