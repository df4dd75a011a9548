/*!
control_flow.rs - Control-flow opcode family handler

Handles:
- JMP absolute ($4C) and indirect ($6C, with the page-wrap quirk applied by
  the Indirect resolver)
- JSR ($20): push PC-1 (high byte first), jump
- RTS ($60): pull PC (low byte first), +1
- RTI ($40): pull P (B cleared, U set), then PC; no +1
- BRK ($00): skip the padding byte, push PC and P with B|U, set I, vector
  through $FFFE

None of these take the page-cross cycle.
*/

use crate::bus::Bus;
use crate::cpu::context::StepContext;
use crate::cpu::execute::{IRQ_VECTOR, interrupt, plp, pop_word, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Op;

pub(super) fn handle<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    match op {
        Op::Jmp => cpu.set_pc(ctx.addr_abs),
        Op::Jsr => {
            let ret = cpu.pc().wrapping_sub(1);
            push_word(cpu, bus, ret);
            cpu.set_pc(ctx.addr_abs);
        }
        Op::Rts => {
            let ret = pop_word(cpu, bus);
            cpu.set_pc(ret.wrapping_add(1));
        }
        Op::Rti => {
            plp(cpu, bus);
            let pc = pop_word(cpu, bus);
            cpu.set_pc(pc);
        }
        Op::Brk => {
            cpu.advance_pc_one();
            interrupt(cpu, bus, IRQ_VECTOR, true);
        }
        _ => return None,
    }
    Some(false)
}
