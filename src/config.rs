//! Trace runner configuration.
//!
//! Parsed from command-line style arguments:
//!
//! ```text
//! nestrace <rom.nes> [--pc HEX] [--steps N]
//! ```
//!
//! Defaults reproduce the automated start state of the CPU test ROM
//! (S=$FD, P=$24) and trace the length of its reference log.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "usage: nestrace <rom.nes> [--pc HEX] [--steps N]";

/// Steps in the published reference log for the CPU test ROM.
pub const DEFAULT_STEPS: usize = 8991;
pub const DEFAULT_SP: u8 = 0xFD;
pub const DEFAULT_STATUS: u8 = 0x24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing ROM path\n{usage}", usage = USAGE)]
    MissingRom,

    #[error("option {0} expects a value")]
    MissingValue(String),

    #[error("invalid program counter {0:?}: expected 1-4 hex digits")]
    InvalidPc(String),

    #[error("invalid step count {0:?}")]
    InvalidSteps(String),

    #[error("unexpected argument {0:?}\n{usage}", usage = USAGE)]
    Unexpected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub rom_path: PathBuf,
    /// Entry point; `None` keeps the PC loaded from the reset vector.
    pub start_pc: Option<u16>,
    pub steps: usize,
    pub initial_sp: u8,
    pub initial_status: u8,
}

impl TraceConfig {
    pub fn new(rom_path: impl Into<PathBuf>) -> Self {
        Self {
            rom_path: rom_path.into(),
            start_pc: None,
            steps: DEFAULT_STEPS,
            initial_sp: DEFAULT_SP,
            initial_status: DEFAULT_STATUS,
        }
    }

    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rom_path: Option<PathBuf> = None;
        let mut start_pc = None;
        let mut steps = DEFAULT_STEPS;

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--pc" => {
                    let v = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    start_pc = Some(parse_pc(&v)?);
                }
                "--steps" => {
                    let v = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    steps = v.parse().map_err(|_| ConfigError::InvalidSteps(v.clone()))?;
                }
                _ if arg.starts_with("--") || rom_path.is_some() => {
                    return Err(ConfigError::Unexpected(arg));
                }
                _ => rom_path = Some(PathBuf::from(arg)),
            }
        }

        let rom_path = rom_path.ok_or(ConfigError::MissingRom)?;
        Ok(Self {
            start_pc,
            steps,
            ..Self::new(rom_path)
        })
    }
}

/// Accepts `C000`, `c000`, `$C000` or `0xC000`.
fn parse_pc(s: &str) -> Result<u16, ConfigError> {
    let digits = s
        .strip_prefix('$')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || digits.len() > 4 {
        return Err(ConfigError::InvalidPc(s.to_string()));
    }
    u16::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidPc(s.to_string()))
}
