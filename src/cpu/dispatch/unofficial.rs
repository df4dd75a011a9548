/*!
unofficial.rs - Undocumented opcode family handler

Combined RMW + ALU (cycle counts fixed, no page-cross cycle):
  SLO = ASL then ORA     RLA = ROL then AND
  SRE = LSR then EOR     RRA = ROR then ADC
  DCP = DEC then CMP     ISC = INC then SBC

Load / store pairs:
  LAX = LDA + LDX (page-cross cycle allowed)
  SAX = store A & X

Immediate combinations:
  ANC, ALR, ARR, ANE, LXA, SBX

Unstable stores (value & (base high byte + 1), see `execute::unstable_store`):
  SHA (A & X), SHX (X), SHY (Y), TAS (SP = A & X, then store SP)

LAS = A, X, SP = M & SP (page-cross cycle allowed)
*/

use crate::bus::Bus;
use crate::cpu::addressing::fetch;
use crate::cpu::context::StepContext;
use crate::cpu::execute::{
    alr, anc, ane, arr, dcp, isc, las, lax, lxa, rla, rra, sbx, slo, sre, unstable_store,
};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Op;

pub(super) fn handle<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    let addr = ctx.addr_abs;
    match op {
        // RMW + ALU
        Op::Slo => slo(cpu, bus, addr),
        Op::Rla => rla(cpu, bus, addr),
        Op::Sre => sre(cpu, bus, addr),
        Op::Rra => rra(cpu, bus, addr),
        Op::Dcp => dcp(cpu, bus, addr),
        Op::Isc => isc(cpu, bus, addr),

        Op::Lax => {
            let v = fetch(bus, ctx);
            lax(cpu, v);
            return Some(true);
        }
        Op::Las => {
            let v = fetch(bus, ctx);
            las(cpu, v);
            return Some(true);
        }
        Op::Sax => bus.write(addr, cpu.a() & cpu.x()),

        // Immediate
        Op::Anc | Op::Alr | Op::Arr | Op::Ane | Op::Lxa | Op::Sbx => {
            let v = fetch(bus, ctx);
            match op {
                Op::Anc => anc(cpu, v),
                Op::Alr => alr(cpu, v),
                Op::Arr => arr(cpu, v),
                Op::Ane => ane(cpu, v),
                Op::Lxa => lxa(cpu, v),
                _ => sbx(cpu, v),
            }
        }

        // Unstable stores
        Op::Sha => unstable_store(bus, addr, cpu.y(), cpu.a() & cpu.x(), ctx.page_crossed),
        Op::Shx => unstable_store(bus, addr, cpu.y(), cpu.x(), ctx.page_crossed),
        Op::Shy => unstable_store(bus, addr, cpu.x(), cpu.y(), ctx.page_crossed),
        Op::Tas => {
            let sp = cpu.a() & cpu.x();
            cpu.set_sp(sp);
            unstable_store(bus, addr, cpu.y(), sp, ctx.page_crossed);
        }
        _ => return None,
    }
    Some(false)
}
