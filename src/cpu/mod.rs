/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
state.rs        - Register file (`CpuState`) and status flag masks.
regs.rs         - `CpuRegs`, the register/flag trait instruction code is written against.
addressing.rs   - Addressing mode enum & operand resolution.
cycles.rs       - Static base cycle table.
table.rs        - Static opcode table: (operation, addressing mode) per byte.
execute.rs      - Instruction semantic helpers (ALU, stack, RMW, branch).
interrupt.rs    - Single-slot RESET/NMI/IRQ latch.
dispatch/       - One CPU step: interrupt entry or fetch/decode/execute.
core/           - `Cpu` facade.
```

The public surface is the `Cpu` facade. Downstream code should not rely on the
internal module layout beyond `Cpu`, `CpuState`, the flag masks and the
opcode table.

Usage:
```no_run
use nescpu::{Bus, Cartridge, Cpu};

let cart = Cartridge::from_ines_file("nestest.nes")?;
let mut bus = Bus::with_cartridge(cart);
let mut cpu = Cpu::new();
cpu.power_on(&mut bus);
let cycles = cpu.step(&mut bus);
# let _ = cycles;
# Ok::<(), nescpu::cartridge::CartridgeError>(())
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod interrupt;
pub mod regs;
pub mod state;
pub mod table;

// Re-exports:
// - Cpu (facade over CpuState)
// - CpuState (raw state; exposed for tests, snapshots, trait impls)
// - Flag constants (canonical bit masks)
pub use crate::cpu::core::Cpu;
pub use crate::cpu::dispatch::control_flow::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use crate::cpu::interrupt::PendingInterrupt;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{OpcodeEntry, Operation, decode};
