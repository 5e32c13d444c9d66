#![doc = r#"
nescpu library crate.

A cycle-counting NES (2A03 / 6502) CPU core with the minimal memory map it
needs to run real program code.

Modules:
- bus: `CpuBus` trait and the NES CPU address decoder (RAM, PPU window stub, cartridge)
- cartridge: iNES v1 loader and 1 KiB PRG/CHR page model
- config: trace runner configuration
- cpu: 6502 CPU core (facade + state + table + dispatch + execute modules)
- trace: trace-line formatting for comparing execution against reference logs

In tests, shared iNES builders are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod trace;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, CpuBus};
pub use cartridge::Cartridge;
pub use cpu::core::Cpu;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
