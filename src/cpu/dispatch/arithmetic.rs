/*!
arithmetic.rs - ADC / SBC opcode family handler

Binary arithmetic only; the decimal flag is ignored. The undocumented
immediate SBC ($EB) is tabled as `Op::Sbc` and lands here too.
*/

use crate::bus::Bus;
use crate::cpu::addressing::fetch;
use crate::cpu::context::StepContext;
use crate::cpu::execute::{adc, sbc};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Op;

pub(super) fn handle<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    match op {
        Op::Adc => {
            let v = fetch(bus, ctx);
            adc(cpu, v);
        }
        Op::Sbc => {
            let v = fetch(bus, ctx);
            sbc(cpu, v);
        }
        _ => return None,
    }
    Some(true)
}
