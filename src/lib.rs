#![doc = r#"
nescore library crate.

CPU-side core of an NES emulator: the 6502 instruction engine (documented and
undocumented opcodes), the CPU address bus, and the iNES cartridge image it
reads program code from.

Modules:
- bus: CPU address-space decoder (work RAM, video register stub, cartridge window)
- cartridge: iNES v1 loader and cartridge metadata
- cpu: 6502 CPU core (facade + state + table + dispatch + execute modules)
- error: CPU and cartridge error types

Stepping is caller-driven: `Cpu::step` executes one instruction and returns
the cycles it consumed.

In tests, shared iNES builders are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod error;

// Re-export commonly used types at the crate root for convenience.
pub use bus::Bus;
pub use cartridge::Cartridge;
pub use cpu::core::Cpu;
pub use error::{CartridgeError, CpuError};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub(crate) mod test_utils;
