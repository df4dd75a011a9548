/*!
misc.rs - Transfers / Stack / Flag / NOP / JAM opcode family handler

Transfers:
  TAX, TAY, TXA, TYA, TSX, TXS (TXS leaves flags alone)

Stack:
  PHA, PLA, PHP (B|U forced in the pushed copy), PLP (B cleared, U set)

Flag operations:
  CLC, SEC, CLI, SEI, CLD, SED, CLV

NOP:
  $EA and every undocumented alias. Aliases with a memory operand still
  perform the read; the absolute,X forms may take the page-cross cycle.

JAM:
  Rewinds PC onto the opcode and halts the CPU. `dispatch::step` turns the
  halted state into `CpuError::Jammed`.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{AddrMode, fetch};
use crate::cpu::context::StepContext;
use crate::cpu::execute::{pha, php, pla, plp, set_flag, tax, tay, tsx, txa, txs, tya};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::cpu::table::Op;

pub(super) fn handle<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    match op {
        // Transfers
        Op::Tax => tax(cpu),
        Op::Tay => tay(cpu),
        Op::Txa => txa(cpu),
        Op::Tya => tya(cpu),
        Op::Tsx => tsx(cpu),
        Op::Txs => txs(cpu),

        // Stack
        Op::Pha => pha(cpu, bus),
        Op::Pla => pla(cpu, bus),
        Op::Php => php(cpu, bus),
        Op::Plp => plp(cpu, bus),

        // Flags
        Op::Clc => set_flag(cpu, CARRY, false),
        Op::Sec => set_flag(cpu, CARRY, true),
        Op::Cli => set_flag(cpu, IRQ_DISABLE, false),
        Op::Sei => set_flag(cpu, IRQ_DISABLE, true),
        Op::Cld => set_flag(cpu, DECIMAL, false),
        Op::Sed => set_flag(cpu, DECIMAL, true),
        Op::Clv => set_flag(cpu, OVERFLOW, false),

        Op::Nop => {
            if ctx.mode != AddrMode::Implied {
                fetch(bus, ctx);
            }
            return Some(true);
        }
        Op::Jam => {
            cpu.set_pc(ctx.pc);
            cpu.set_halted(true);
        }
        _ => return None,
    }
    Some(false)
}
