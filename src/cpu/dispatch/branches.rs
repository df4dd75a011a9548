/*!
branches.rs - Conditional branch opcode family handler

Handles BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ (Relative mode).

Timing
======
- Not taken: base cycles (2), PC already past the displacement.
- Taken: +1, and +1 more when the target lies on a different page than the
  instruction following the branch. Both are added to `ctx.cycles` here; the
  generic page-cross penalty does not apply.
*/

use crate::bus::Bus;
use crate::cpu::context::StepContext;
use crate::cpu::cycles::branch_taken_cycles;
use crate::cpu::execute::{branch_offset, get_flag};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::table::Op;

pub(super) fn handle<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    _bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    let take = match op {
        Op::Bpl => !get_flag(cpu, NEGATIVE),
        Op::Bmi => get_flag(cpu, NEGATIVE),
        Op::Bvc => !get_flag(cpu, OVERFLOW),
        Op::Bvs => get_flag(cpu, OVERFLOW),
        Op::Bcc => !get_flag(cpu, CARRY),
        Op::Bcs => get_flag(cpu, CARRY),
        Op::Bne => !get_flag(cpu, ZERO),
        Op::Beq => get_flag(cpu, ZERO),
        _ => return None,
    };
    if take {
        let from = cpu.pc();
        branch_offset(cpu, ctx.addr_rel);
        ctx.cycles += branch_taken_cycles(from, cpu.pc());
    }
    Some(false)
}
