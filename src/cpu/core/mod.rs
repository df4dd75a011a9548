/*!
core::Cpu - Public 6502 CPU façade wrapping `CpuState`.

Design
======
- `Cpu` owns the architectural state (`CpuState`) and a running cycle total.
- Execution (`step`, `run`, `nmi`, `irq`) delegates to the generic
  dispatcher, which operates on `CpuState` through the `CpuRegs` trait.
- A JAM opcode leaves the CPU halted. `step` reports `CpuError::Jammed`
  until `resume` or `reset` clears the condition.

Lifecycle
=========
`new` gives power-up register values with PC = 0. Call `reset` with a bus
whose reset vector is mapped to start executing cartridge code, or set PC
directly for code placed in work RAM.
*/

use crate::bus::Bus;
use crate::cpu::dispatch;
use crate::cpu::execute::RESET_VECTOR;
use crate::cpu::state::{BREAK, CpuState, UNUSED};
use crate::error::CpuError;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    total_cycles: u64,
}

impl Cpu {
    /// Construct a new CPU with power-up defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Restore power-up registers, clear the halt and the cycle total, and
    /// load PC from the reset vector.
    pub fn reset(&mut self, bus: &mut Bus) {
        self.state = CpuState::new();
        self.state.pc = bus.read_word(RESET_VECTOR);
        self.total_cycles = 0;
        log::debug!("CPU reset, PC=${:04X}", self.state.pc);
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute one instruction and return the cycles it took.
    pub fn step(&mut self, bus: &mut Bus) -> Result<u32, CpuError> {
        let cycles = dispatch::step(&mut self.state, bus)?;
        self.total_cycles += cycles as u64;
        Ok(cycles)
    }

    /// Step up to `max_instructions` times. Returns the cycles consumed, or
    /// the jam that stopped execution early.
    pub fn run(&mut self, bus: &mut Bus, max_instructions: usize) -> Result<u64, CpuError> {
        let mut cycles = 0u64;
        for _ in 0..max_instructions {
            cycles += self.step(bus)? as u64;
        }
        Ok(cycles)
    }

    /// Service a non-maskable interrupt. Returns the cycles consumed.
    pub fn nmi(&mut self, bus: &mut Bus) -> u32 {
        let cycles = dispatch::nmi(&mut self.state, bus);
        self.total_cycles += cycles as u64;
        cycles
    }

    /// Service a maskable interrupt; returns 0 when InterruptDisable is set.
    pub fn irq(&mut self, bus: &mut Bus) -> u32 {
        let cycles = dispatch::irq(&mut self.state, bus);
        self.total_cycles += cycles as u64;
        cycles
    }

    /// Cycles executed since construction or the last reset.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    // ---------------------------------------------------------------------
    // Halt state
    // ---------------------------------------------------------------------

    /// True after a JAM opcode until `resume` / `reset`.
    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    /// Clear the halt left by a JAM. PC still points at the jamming opcode,
    /// so move it before stepping again.
    pub fn resume(&mut self) {
        self.state.halted = false;
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
    /// Load P. Unused reads as 1 and Break has no live storage, so both are
    /// normalized the way PLP does.
    pub fn set_status(&mut self, v: u8) {
        self.state.status = (v | UNUSED) & !BREAK;
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
        self.set_status(self.state.status);
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }
}
