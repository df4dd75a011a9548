/*!
rmw.rs - Read-Modify-Write / shift / INC / DEC opcode family handler

Handles:
- ASL / LSR / ROL / ROR in accumulator and memory forms
- INC / DEC memory
- INX / INY / DEX / DEY

Memory forms go through `execute::rmw_memory`, so the bus sees the read, the
write-back of the unmodified value, then the final write. Base cycles already
include the indexed fix-up cycle, so the handler never asks for the page-cross
penalty.
*/

use crate::bus::Bus;
use crate::cpu::addressing::AddrMode;
use crate::cpu::context::StepContext;
use crate::cpu::execute::{
    asl_acc, asl_mem, dec_mem, dex, dey, inc_mem, inx, iny, lsr_acc, lsr_mem, rol_acc, rol_mem,
    ror_acc, ror_mem,
};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Op;

pub(super) fn handle<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    let on_acc = ctx.mode == AddrMode::Accumulator;
    let addr = ctx.addr_abs;
    match op {
        Op::Asl if on_acc => asl_acc(cpu),
        Op::Lsr if on_acc => lsr_acc(cpu),
        Op::Rol if on_acc => rol_acc(cpu),
        Op::Ror if on_acc => ror_acc(cpu),
        Op::Asl => {
            asl_mem(cpu, bus, addr);
        }
        Op::Lsr => {
            lsr_mem(cpu, bus, addr);
        }
        Op::Rol => {
            rol_mem(cpu, bus, addr);
        }
        Op::Ror => {
            ror_mem(cpu, bus, addr);
        }
        Op::Inc => {
            inc_mem(cpu, bus, addr);
        }
        Op::Dec => {
            dec_mem(cpu, bus, addr);
        }
        Op::Inx => inx(cpu),
        Op::Iny => iny(cpu),
        Op::Dex => dex(cpu),
        Op::Dey => dey(cpu),
        _ => return None,
    }
    Some(false)
}
