/*!
compare.rs - Compare opcode family handler

Handles:
- CMP (all read addressing modes, page-cross cycle allowed)
- CPX / CPY (immediate, zero page, absolute)

Flags:
- C = register >= operand (unsigned)
- Z = register == operand
- N = bit 7 of (register - operand)
*/

use crate::bus::Bus;
use crate::cpu::addressing::fetch;
use crate::cpu::context::StepContext;
use crate::cpu::execute::cmp_generic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Op;

pub(super) fn handle<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    let reg = match op {
        Op::Cmp => cpu.a(),
        Op::Cpx => cpu.x(),
        Op::Cpy => cpu.y(),
        _ => return None,
    };
    let v = fetch(bus, ctx);
    cmp_generic(cpu, reg, v);
    Some(true)
}
