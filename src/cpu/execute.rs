/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Centralize side-effect logic for instructions so the family handlers in
`dispatch` stay thin: they pick the operand via the addressing context and
call into here. All helpers are generic over `CpuRegs`; memory is reached
through an explicit `&mut Bus`.

Scope (crate-visible)
---------------------
Flag & status helpers:
    set_flag, get_flag, update_zn

Stack helpers:
    push, pop, push_word, pop_word, push_status_with_break
    php, plp, pha, pla

Interrupt entry (BRK / NMI / IRQ):
    interrupt

Core ALU / register transfer:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs
    and/ora/eor/bit
    inx/iny/dex/dey
    adc/sbc, cmp_generic

Shifts / rotates / INC / DEC:
    accumulator and memory forms; memory forms go through `rmw_memory`

Undocumented combinations:
    slo/rla/sre/rra/dcp/isc (RMW then ALU)
    lax, anc, alr, arr, ane, lxa, sbx, las
    unstable_store (SHA/SHX/SHY/TAS address/value corruption)

Design Notes
============
- Decimal mode is stored but never consulted; ADC/SBC are binary only.
- Memory RMW forms return the written value so the combined undocumented
  operations can feed it into their second half.
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{BREAK, CARRY, IRQ_DISABLE, NEGATIVE, OVERFLOW, STACK_BASE, UNUSED, ZERO};

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Bus-dependent constant OR-ed into A by ANE / LXA. 0xEE is the value the
/// common NMOS parts settle on.
pub const UNSTABLE_MAGIC: u8 = 0xEE;

// ---------------------------------------------------------------------------
// Flag helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn set_flag<C: CpuRegs>(cpu: &mut C, mask: u8, on: bool) {
    cpu.assign_flag(mask, on);
}

#[inline]
pub(crate) fn get_flag<C: CpuRegs>(cpu: &C, mask: u8) -> bool {
    cpu.is_flag_set(mask)
}

#[inline]
pub(crate) fn update_zn<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.update_zn(v);
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------
//
// Push: write at $0100 | SP, then SP -= 1
// Pull: SP += 1, then read at $0100 | SP

#[inline]
pub(crate) fn push<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, v: u8) {
    let sp = cpu.sp();
    bus.write(STACK_BASE | sp as u16, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read(STACK_BASE | sp as u16)
}

/// Push high byte first so the word sits little-endian in memory.
#[inline]
pub(crate) fn push_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, v: u16) {
    push(cpu, bus, (v >> 8) as u8);
    push(cpu, bus, (v & 0xFF) as u8);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u16 {
    let lo = pop(cpu, bus) as u16;
    let hi = pop(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Push P with control over Break flag semantics (BRK/PHP vs IRQ/NMI).
pub(crate) fn push_status_with_break<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, set_break: bool) {
    let v = cpu.compose_status_for_push(set_break);
    push(cpu, bus, v);
}

#[inline]
pub(crate) fn php<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    push_status_with_break(cpu, bus, true);
}

#[inline]
pub(crate) fn plp<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    let v = pop(cpu, bus);
    cpu.set_status((v | UNUSED) & !BREAK);
}

#[inline]
pub(crate) fn pha<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    let val = pop(cpu, bus);
    cpu.set_a(val);
    update_zn(cpu, val);
}

/// Interrupt entry: push PC and P, set I, load PC from `vector`.
/// `set_break` distinguishes BRK from hardware NMI / IRQ.
pub(crate) fn interrupt<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, vector: u16, set_break: bool) {
    let pc = cpu.pc();
    push_word(cpu, bus, pc);
    push_status_with_break(cpu, bus, set_break);
    set_flag(cpu, IRQ_DISABLE, true);
    let target = bus.read_word(vector);
    cpu.set_pc(target);
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.a());
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    cpu.set_y(cpu.a());
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    cpu.set_a(cpu.x());
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    cpu.set_a(cpu.y());
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.sp());
    update_zn(cpu, cpu.x());
}

/// TXS leaves the flags alone.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    cpu.set_sp(cpu.x());
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() & v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() | v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() ^ v);
    update_zn(cpu, cpu.a());
}

/// Z from A & M; N and V straight from bits 7 and 6 of M.
#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    set_flag(cpu, ZERO, (cpu.a() & v) == 0);
    set_flag(cpu, NEGATIVE, (v & 0x80) != 0);
    set_flag(cpu, OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.x().wrapping_add(1));
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    cpu.set_y(cpu.y().wrapping_add(1));
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.x().wrapping_sub(1));
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    cpu.set_y(cpu.y().wrapping_sub(1));
    update_zn(cpu, cpu.y());
}

// ---------------------------------------------------------------------------
// Shift / rotate cores (set C, return the result; Z/N left to the caller)
// ---------------------------------------------------------------------------

#[inline]
fn asl_core<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    set_flag(cpu, CARRY, (v & 0x80) != 0);
    v << 1
}

#[inline]
fn lsr_core<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    set_flag(cpu, CARRY, (v & 0x01) != 0);
    v >> 1
}

#[inline]
fn rol_core<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.carry_bit();
    set_flag(cpu, CARRY, (v & 0x80) != 0);
    (v << 1) | carry_in
}

#[inline]
fn ror_core<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.carry_bit() << 7;
    set_flag(cpu, CARRY, (v & 0x01) != 0);
    (v >> 1) | carry_in
}

// ---------------------------------------------------------------------------
// Shifts / Rotates - Accumulator
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_acc<C: CpuRegs>(cpu: &mut C) {
    let r = asl_core(cpu, cpu.a());
    cpu.set_a(r);
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn lsr_acc<C: CpuRegs>(cpu: &mut C) {
    let r = lsr_core(cpu, cpu.a());
    cpu.set_a(r);
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn rol_acc<C: CpuRegs>(cpu: &mut C) {
    let r = rol_core(cpu, cpu.a());
    cpu.set_a(r);
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn ror_acc<C: CpuRegs>(cpu: &mut C) {
    let r = ror_core(cpu, cpu.a());
    cpu.set_a(r);
    update_zn(cpu, r);
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let sum16 = a as u16 + v as u16 + cpu.carry_bit() as u16;
    let result = sum16 as u8;

    set_flag(cpu, CARRY, sum16 > 0xFF);
    // Overflow: ( !(A ^ M) & (A ^ R) & 0x80 ) != 0
    set_flag(cpu, OVERFLOW, ((!(a ^ v)) & (a ^ result) & 0x80) != 0);

    cpu.set_a(result);
    update_zn(cpu, result);
}

#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, v ^ 0xFF);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn cmp_generic<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    set_flag(cpu, CARRY, reg >= v);
    update_zn(cpu, reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory) choreography
// ---------------------------------------------------------------------------

/// Canonical 6502 RMW sequence: read -> dummy write of the old value ->
/// write new. Returns the final value.
pub(crate) fn rmw_memory<C: CpuRegs, F>(cpu: &mut C, bus: &mut Bus, addr: u16, transform: F) -> u8
where
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = bus.read(addr);
    bus.write(addr, old);
    let newv = transform(cpu, old);
    bus.write(addr, newv);
    newv
}

// ---------------------------------------------------------------------------
// Shifts / Rotates / INC / DEC - Memory
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    let r = rmw_memory(cpu, bus, addr, asl_core);
    update_zn(cpu, r);
    r
}

#[inline]
pub(crate) fn lsr_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    let r = rmw_memory(cpu, bus, addr, lsr_core);
    update_zn(cpu, r);
    r
}

#[inline]
pub(crate) fn rol_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    let r = rmw_memory(cpu, bus, addr, rol_core);
    update_zn(cpu, r);
    r
}

#[inline]
pub(crate) fn ror_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    let r = rmw_memory(cpu, bus, addr, ror_core);
    update_zn(cpu, r);
    r
}

#[inline]
pub(crate) fn inc_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    let r = rmw_memory(cpu, bus, addr, |_, old| old.wrapping_add(1));
    update_zn(cpu, r);
    r
}

#[inline]
pub(crate) fn dec_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    let r = rmw_memory(cpu, bus, addr, |_, old| old.wrapping_sub(1));
    update_zn(cpu, r);
    r
}

// ---------------------------------------------------------------------------
// Undocumented: RMW followed by an accumulator operation
// ---------------------------------------------------------------------------

/// SLO: ASL memory, then ORA.
pub(crate) fn slo<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) {
    let r = asl_mem(cpu, bus, addr);
    ora(cpu, r);
}

/// RLA: ROL memory, then AND.
pub(crate) fn rla<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) {
    let r = rol_mem(cpu, bus, addr);
    and(cpu, r);
}

/// SRE: LSR memory, then EOR.
pub(crate) fn sre<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) {
    let r = lsr_mem(cpu, bus, addr);
    eor(cpu, r);
}

/// RRA: ROR memory, then ADC using the carry the rotate produced.
pub(crate) fn rra<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) {
    let r = ror_mem(cpu, bus, addr);
    adc(cpu, r);
}

/// DCP: DEC memory, then CMP against A.
pub(crate) fn dcp<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) {
    let r = dec_mem(cpu, bus, addr);
    cmp_generic(cpu, cpu.a(), r);
}

/// ISC: INC memory, then SBC.
pub(crate) fn isc<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) {
    let r = inc_mem(cpu, bus, addr);
    sbc(cpu, r);
}

// ---------------------------------------------------------------------------
// Undocumented: immediate / register combinations
// ---------------------------------------------------------------------------

/// LAX: A = X = M.
#[inline]
pub(crate) fn lax<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.set_x(v);
    update_zn(cpu, v);
}

/// ANC: AND, then C = N.
pub(crate) fn anc<C: CpuRegs>(cpu: &mut C, v: u8) {
    and(cpu, v);
    set_flag(cpu, CARRY, (cpu.a() & 0x80) != 0);
}

/// ALR: AND, then LSR A.
pub(crate) fn alr<C: CpuRegs>(cpu: &mut C, v: u8) {
    and(cpu, v);
    lsr_acc(cpu);
}

/// ARR: AND, then ROR A; C = bit 6, V = bit 6 ^ bit 5 of the result.
pub(crate) fn arr<C: CpuRegs>(cpu: &mut C, v: u8) {
    let t = cpu.a() & v;
    let r = (t >> 1) | (cpu.carry_bit() << 7);
    cpu.set_a(r);
    update_zn(cpu, r);
    set_flag(cpu, CARRY, (r & 0x40) != 0);
    set_flag(cpu, OVERFLOW, ((r >> 6) ^ (r >> 5)) & 0x01 != 0);
}

/// ANE (XAA): A = (A | magic) & X & imm.
pub(crate) fn ane<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = (cpu.a() | UNSTABLE_MAGIC) & cpu.x() & v;
    cpu.set_a(r);
    update_zn(cpu, r);
}

/// LXA: A = X = (A | magic) & imm.
pub(crate) fn lxa<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = (cpu.a() | UNSTABLE_MAGIC) & v;
    lax(cpu, r);
}

/// SBX (AXS): X = (A & X) - imm, carry as in CMP, no borrow in.
pub(crate) fn sbx<C: CpuRegs>(cpu: &mut C, v: u8) {
    let t = cpu.a() & cpu.x();
    set_flag(cpu, CARRY, t >= v);
    let r = t.wrapping_sub(v);
    cpu.set_x(r);
    update_zn(cpu, r);
}

/// LAS: A = X = SP = M & SP.
pub(crate) fn las<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = v & cpu.sp();
    cpu.set_sp(r);
    lax(cpu, r);
}

/// SHA / SHX / SHY / TAS store: `value & (H + 1)` where H is the high byte
/// of the un-indexed base address. When indexing crossed a page the stored
/// value also replaces the target's high byte.
pub(crate) fn unstable_store(bus: &mut Bus, addr: u16, index: u8, value: u8, page_crossed: bool) {
    let base = addr.wrapping_sub(index as u16);
    let hi = (base >> 8) as u8;
    let v = value & hi.wrapping_add(1);
    let target = if page_crossed {
        ((v as u16) << 8) | (addr & 0x00FF)
    } else {
        addr
    };
    bus.write(target, v);
}

// ---------------------------------------------------------------------------
// Branch helper
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn branch_offset<C: CpuRegs>(cpu: &mut C, rel: u16) {
    let new_pc = cpu.pc().wrapping_add(rel);
    cpu.set_pc(new_pc);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
