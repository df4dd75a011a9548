/*!
context.rs - Per-instruction scratch state.

A `StepContext` is built right after the opcode fetch, filled in by the
addressing resolver, consumed by the operation handler, and dropped when the
step returns. Nothing in it survives into the next instruction.
*/

use crate::cpu::addressing::AddrMode;
use crate::cpu::table::Instruction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StepContext {
    /// Address of the opcode byte.
    pub pc: u16,
    pub opcode: u8,
    pub mode: AddrMode,
    /// Operand value (accumulator copy, or the last `fetch` result).
    pub fetched: u8,
    /// Effective address produced by the resolver.
    pub addr_abs: u16,
    /// Sign-extended branch displacement (Relative mode only).
    pub addr_rel: u16,
    /// Set by the resolver when indexing carried into the high byte.
    pub page_crossed: bool,
    /// Cycle count for the instruction in progress (base plus penalties).
    pub cycles: u32,
}

impl StepContext {
    pub(crate) fn new(pc: u16, opcode: u8, instr: &Instruction) -> Self {
        Self {
            pc,
            opcode,
            mode: instr.mode,
            fetched: 0,
            addr_abs: 0,
            addr_rel: 0,
            page_crossed: false,
            cycles: instr.cycles as u32,
        }
    }
}
