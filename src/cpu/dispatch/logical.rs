/*!
logical.rs - Logical opcode family handler

Handles AND / ORA / EOR (read, may take the page-cross cycle) and BIT
(zero page / absolute only).
*/

use crate::bus::Bus;
use crate::cpu::addressing::fetch;
use crate::cpu::context::StepContext;
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Op;

pub(super) fn handle<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    let f: fn(&mut C, u8) = match op {
        Op::And => and,
        Op::Ora => ora,
        Op::Eor => eor,
        Op::Bit => {
            let v = fetch(bus, ctx);
            bit(cpu, v);
            return Some(false);
        }
        _ => return None,
    };
    let v = fetch(bus, ctx);
    f(cpu, v);
    Some(true)
}
