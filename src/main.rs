//! nestrace: run an iNES image on the CPU core and print one trace line per step.
//!
//! `RUST_LOG=debug` shows cartridge and power-on details on stderr;
//! `RUST_LOG=trace` adds per-instruction decode output.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use log::info;

use nescpu::config::TraceConfig;
use nescpu::trace::Tracer;
use nescpu::{Bus, Cartridge, Cpu};

fn main() -> Result<()> {
    env_logger::init();

    let config = TraceConfig::from_args(std::env::args().skip(1))?;
    let cart = Cartridge::from_ines_file(&config.rom_path)
        .with_context(|| format!("failed to load {}", config.rom_path.display()))?;
    info!(
        "{}: {} KiB PRG, {} KiB CHR{}",
        config.rom_path.display(),
        cart.prg_pages(),
        cart.chr_pages(),
        if cart.chr_is_ram() { " (RAM)" } else { "" }
    );

    let mut bus = Bus::with_cartridge(cart);
    let mut cpu = Cpu::new();
    cpu.power_on(&mut bus);
    cpu.set_sp(config.initial_sp);
    cpu.set_status(config.initial_status);
    if let Some(pc) = config.start_pc {
        cpu.set_pc(pc);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut tracer = Tracer::new();
    for _ in 0..config.steps {
        let line = tracer.step(&mut cpu, &mut bus);
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    info!(
        "{} steps, {} cycles, final PC={:04X}",
        config.steps,
        cpu.total_cycles(),
        cpu.pc()
    );
    Ok(())
}
