/*!
dispatch - Orchestrator for a single 6502 CPU step and interrupt entry

Overview
========
One call to `step` performs a full fetch -> decode -> resolve -> execute ->
cycle-accounting sequence:
1. Refuse to run while halted (JAM): report `CpuError::Jammed` again.
2. Fetch the opcode and look up its `Instruction` in the static table.
3. Build a fresh `StepContext` and run the addressing resolver, which
   reports whether indexing crossed a page.
4. Hand the operation to the family handlers in turn. Each returns
   `Some(may_add_cycle)` when it owns the operation.
5. Add the page-cross cycle only when both signals agree; branch penalties
   were already added to the context by the branch handler.

Family handlers
===============
load_store, logical, arithmetic, compare, branches, rmw, control_flow,
misc (transfers / stack / flags / NOP / JAM), unofficial.

Interrupts
==========
`nmi` / `irq` run the 7-cycle entry sequence (push PC, push P with B clear,
set I, load vector). IRQ is ignored while I is set. Neither fires while the
CPU is jammed.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{fetch_byte, resolve};
use crate::cpu::context::StepContext;
use crate::cpu::cycles::{INTERRUPT_CYCLES, page_penalty};
use crate::cpu::execute::{IRQ_VECTOR, NMI_VECTOR, get_flag, interrupt};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::IRQ_DISABLE;
use crate::cpu::table::{Op, lookup};
use crate::error::CpuError;

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;
pub(crate) mod unofficial;

/// Execute one instruction and return the cycles it consumed.
pub(crate) fn step<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Result<u32, CpuError> {
    if cpu.halted() {
        let pc = cpu.pc();
        return Err(CpuError::Jammed {
            opcode: bus.read(pc),
            pc,
        });
    }

    let pc = cpu.pc();
    let opcode = fetch_byte(cpu, bus);
    let instr = lookup(opcode);

    #[cfg(feature = "trace")]
    log::trace!(
        "{:04X}  {:02X}  {:<4} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
        pc,
        opcode,
        instr.mnemonic,
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.status(),
        cpu.sp()
    );

    let mut ctx = StepContext::new(pc, opcode, instr);
    let crossed = resolve(instr.mode, cpu, bus, &mut ctx);
    let may_add_cycle = execute(instr.op, cpu, bus, &mut ctx).unwrap_or(false);

    if cpu.halted() {
        log::warn!("CPU jammed on opcode ${opcode:02X} at ${pc:04X}");
        return Err(CpuError::Jammed { opcode, pc });
    }

    Ok(ctx.cycles + page_penalty(crossed, may_add_cycle))
}

/// Route `op` to the family that owns it.
fn execute<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    load_store::handle(op, cpu, bus, ctx)
        .or_else(|| logical::handle(op, cpu, bus, ctx))
        .or_else(|| arithmetic::handle(op, cpu, bus, ctx))
        .or_else(|| compare::handle(op, cpu, bus, ctx))
        .or_else(|| branches::handle(op, cpu, bus, ctx))
        .or_else(|| rmw::handle(op, cpu, bus, ctx))
        .or_else(|| control_flow::handle(op, cpu, bus, ctx))
        .or_else(|| misc::handle(op, cpu, bus, ctx))
        .or_else(|| unofficial::handle(op, cpu, bus, ctx))
}

/// Non-maskable interrupt entry. Returns the cycles consumed (0 if jammed).
pub(crate) fn nmi<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u32 {
    service_interrupt(cpu, bus, NMI_VECTOR)
}

/// Maskable interrupt entry; a no-op (0 cycles) while I is set.
pub(crate) fn irq<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u32 {
    if get_flag(cpu, IRQ_DISABLE) {
        return 0;
    }
    service_interrupt(cpu, bus, IRQ_VECTOR)
}

fn service_interrupt<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, vector: u16) -> u32 {
    if cpu.halted() {
        return 0;
    }
    interrupt(cpu, bus, vector, false);
    INTERRUPT_CYCLES
}
