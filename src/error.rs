/*!
Error types surfaced by the core.

Only two things can go wrong here: the CPU executes a locking (JAM) opcode,
or a cartridge image handed to the loader is malformed. A missing cartridge
is not an error; the bus answers every address regardless.
*/

use std::fmt;

/// Execution failure reported by `Cpu::step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// A JAM/KIL opcode was executed. `pc` is the address of the opcode byte.
    /// The CPU stays halted until `Cpu::resume` or `Cpu::reset`.
    Jammed { opcode: u8, pc: u16 },
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::Jammed { opcode, pc } => {
                write!(f, "CPU jammed on opcode ${opcode:02X} at ${pc:04X}")
            }
        }
    }
}

impl std::error::Error for CpuError {}

/// Reasons an iNES buffer cannot become a `Cartridge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    /// Buffer shorter than the 16-byte header.
    TooShort(usize),
    /// First four bytes are not `NES\x1A`.
    BadMagic([u8; 4]),
    /// Header announces a trainer but the buffer ends inside it.
    MissingTrainer,
    /// Header declares zero PRG units.
    EmptyPrg,
    TruncatedPrg { expected: usize, available: usize },
    TruncatedChr { expected: usize, available: usize },
    /// Reading the file failed.
    Io(String),
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::TooShort(len) => {
                write!(f, "data too small for iNES header ({len} bytes)")
            }
            CartridgeError::BadMagic(m) => write!(
                f,
                "invalid iNES header magic {:02X} {:02X} {:02X} {:02X} (expected NES<1A>)",
                m[0], m[1], m[2], m[3]
            ),
            CartridgeError::MissingTrainer => write!(f, "data too small for iNES trainer"),
            CartridgeError::EmptyPrg => write!(f, "header declares no PRG ROM"),
            CartridgeError::TruncatedPrg {
                expected,
                available,
            } => write!(
                f,
                "PRG ROM truncated: expected {expected} bytes, {available} available"
            ),
            CartridgeError::TruncatedChr {
                expected,
                available,
            } => write!(
                f,
                "CHR ROM truncated: expected {expected} bytes, {available} available"
            ),
            CartridgeError::Io(msg) => write!(f, "failed to read iNES file: {msg}"),
        }
    }
}

impl std::error::Error for CartridgeError {}
