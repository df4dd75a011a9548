/*!
addressing.rs - 6502 addressing modes and operand resolution (shared by dispatch)

Overview
========
Provides:
- Instruction stream byte/word fetch
- The 13 addressing modes as `AddrMode`, resolved by `resolve` into a
  `StepContext`
- The shared operand `fetch` used by operation handlers
- Emulation of the 6502 JMP (indirect) page-wrap quirk

Scope & Responsibilities
========================
- Pure address / operand resolution only.
- Does NOT apply cycle penalties. `resolve` reports page-cross events and the
  dispatcher combines that with the handler's may-add-cycle answer.
- Zero-page indexed modes wrap inside page 0 and never report a cross.

Caller Assumptions
==================
- PC points at the first operand byte when `resolve` is invoked.
- Resolvers advance PC by exactly the operand width they consume.
*/

use crate::bus::Bus;
use crate::cpu::context::StepContext;
use crate::cpu::cycles::pages_differ;
use crate::cpu::regs::CpuRegs;

/// The 13 addressing modes of the 6502.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AddrMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Relative,
    Indirect,
    /// (zp,X)
    IndirectX,
    /// (zp),Y
    IndirectY,
}

impl AddrMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddrMode::Implied | AddrMode::Accumulator => 0,
            AddrMode::Immediate
            | AddrMode::ZeroPage
            | AddrMode::ZeroPageX
            | AddrMode::ZeroPageY
            | AddrMode::Relative
            | AddrMode::IndirectX
            | AddrMode::IndirectY => 1,
            AddrMode::Absolute | AddrMode::AbsoluteX | AddrMode::AbsoluteY | AddrMode::Indirect => 2,
        }
    }
}

/// Fetch next byte from the instruction stream, incrementing PC.
#[inline]
pub(crate) fn fetch_byte<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u8 {
    let v = bus.read(cpu.pc());
    cpu.advance_pc_one();
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
#[inline]
pub(crate) fn fetch_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u16 {
    let lo = fetch_byte(cpu, bus) as u16;
    let hi = fetch_byte(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Resolve the operand for `mode` into `ctx`. Returns true when adding an
/// index register carried into the high byte of the base address.
pub(crate) fn resolve<C: CpuRegs>(
    mode: AddrMode,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> bool {
    let crossed = match mode {
        AddrMode::Implied => false,
        AddrMode::Accumulator => {
            ctx.fetched = cpu.a();
            false
        }
        AddrMode::Immediate => {
            ctx.addr_abs = cpu.pc();
            cpu.advance_pc_one();
            false
        }
        AddrMode::ZeroPage => {
            ctx.addr_abs = fetch_byte(cpu, bus) as u16;
            false
        }
        AddrMode::ZeroPageX => {
            ctx.addr_abs = fetch_byte(cpu, bus).wrapping_add(cpu.x()) as u16;
            false
        }
        AddrMode::ZeroPageY => {
            ctx.addr_abs = fetch_byte(cpu, bus).wrapping_add(cpu.y()) as u16;
            false
        }
        AddrMode::Absolute => {
            ctx.addr_abs = fetch_word(cpu, bus);
            false
        }
        AddrMode::AbsoluteX => {
            let base = fetch_word(cpu, bus);
            ctx.addr_abs = base.wrapping_add(cpu.x() as u16);
            pages_differ(base, ctx.addr_abs)
        }
        AddrMode::AbsoluteY => {
            let base = fetch_word(cpu, bus);
            ctx.addr_abs = base.wrapping_add(cpu.y() as u16);
            pages_differ(base, ctx.addr_abs)
        }
        AddrMode::Relative => {
            let offset = fetch_byte(cpu, bus) as i8;
            ctx.addr_rel = offset as i16 as u16;
            false
        }
        AddrMode::Indirect => {
            let ptr = fetch_word(cpu, bus);
            ctx.addr_abs = read_word_indirect_bug(bus, ptr);
            false
        }
        AddrMode::IndirectX => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            ctx.addr_abs = read_word_zp(bus, zp);
            false
        }
        AddrMode::IndirectY => {
            let zp = fetch_byte(cpu, bus);
            let base = read_word_zp(bus, zp);
            ctx.addr_abs = base.wrapping_add(cpu.y() as u16);
            pages_differ(base, ctx.addr_abs)
        }
    };
    ctx.page_crossed = crossed;
    crossed
}

/// Operand read shared by handlers: the accumulator copy for
/// Implied/Accumulator, otherwise one bus read at the resolved address.
#[inline]
pub(crate) fn fetch(bus: &mut Bus, ctx: &mut StepContext) -> u8 {
    if !matches!(ctx.mode, AddrMode::Implied | AddrMode::Accumulator) {
        ctx.fetched = bus.read(ctx.addr_abs);
    }
    ctx.fetched
}

/// Read a 16-bit little endian pointer from zero page with wraparound
/// on the high byte (standard 6502 zero-page indirect behavior).
#[inline]
pub(crate) fn read_word_zp(bus: &mut Bus, base: u8) -> u16 {
    let lo = bus.read(base as u16) as u16;
    let hi = bus.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Emulate the original 6502 JMP (indirect) hardware bug: when the
/// low byte of the indirect vector is 0xFF, the high byte does not
/// cross to the next page; it wraps within the same page.
#[inline]
pub(crate) fn read_word_indirect_bug(bus: &mut Bus, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::cpu::table::lookup;

    /// Bus with `code` in RAM at $0200 and a state whose PC points just past
    /// the opcode byte.
    fn prepare(code: &[u8]) -> (CpuState, Bus, StepContext) {
        let mut bus = Bus::new();
        for (i, b) in code.iter().enumerate() {
            bus.write(0x0200 + i as u16, *b);
        }
        let mut cpu = CpuState::new();
        cpu.set_pc(0x0201);
        let ctx = StepContext::new(0x0200, code[0], lookup(code[0]));
        (cpu, bus, ctx)
    }

    #[test]
    fn abs_x_page_cross_detection() {
        // LDA $80F5,X with X=$10 -> $8105
        let (mut cpu, mut bus, mut ctx) = prepare(&[0xBD, 0xF5, 0x80]);
        cpu.set_x(0x10);
        assert!(resolve(AddrMode::AbsoluteX, &mut cpu, &mut bus, &mut ctx));
        assert_eq!(ctx.addr_abs, 0x8105);
        assert!(ctx.page_crossed);
        assert_eq!(cpu.pc(), 0x0203);

        let (mut cpu, mut bus, mut ctx) = prepare(&[0xBD, 0x00, 0x80]);
        cpu.set_x(0xFF);
        assert!(!resolve(AddrMode::AbsoluteX, &mut cpu, &mut bus, &mut ctx));
        assert_eq!(ctx.addr_abs, 0x80FF);
    }

    #[test]
    fn zero_page_indexed_wraps_without_crossing() {
        let (mut cpu, mut bus, mut ctx) = prepare(&[0xB5, 0xF0]);
        cpu.set_x(0x20);
        assert!(!resolve(AddrMode::ZeroPageX, &mut cpu, &mut bus, &mut ctx));
        assert_eq!(ctx.addr_abs, 0x0010);
    }

    #[test]
    fn indexed_indirect_pointer_wraps_in_zero_page() {
        // (zp,X) with zp+X = $FF: low from $00FF, high from $0000
        let (mut cpu, mut bus, mut ctx) = prepare(&[0xA1, 0xFE]);
        bus.write(0x00FF, 0x34);
        bus.write(0x0000, 0x12);
        cpu.set_x(0x01);
        assert!(!resolve(AddrMode::IndirectX, &mut cpu, &mut bus, &mut ctx));
        assert_eq!(ctx.addr_abs, 0x1234);
    }

    #[test]
    fn indirect_indexed_reports_cross() {
        let (mut cpu, mut bus, mut ctx) = prepare(&[0xB1, 0x40]);
        bus.write(0x0040, 0xF0);
        bus.write(0x0041, 0x03);
        cpu.set_y(0x20);
        assert!(resolve(AddrMode::IndirectY, &mut cpu, &mut bus, &mut ctx));
        assert_eq!(ctx.addr_abs, 0x0410);
    }

    #[test]
    fn relative_offset_sign_extends() {
        let (mut cpu, mut bus, mut ctx) = prepare(&[0xD0, 0xFE]);
        resolve(AddrMode::Relative, &mut cpu, &mut bus, &mut ctx);
        assert_eq!(ctx.addr_rel, 0xFFFE);
        assert_eq!(cpu.pc().wrapping_add(ctx.addr_rel), 0x0200);
    }

    #[test]
    fn accumulator_mode_copies_a() {
        let (mut cpu, mut bus, mut ctx) = prepare(&[0x0A]);
        cpu.set_a(0x5C);
        resolve(AddrMode::Accumulator, &mut cpu, &mut bus, &mut ctx);
        assert_eq!(fetch(&mut bus, &mut ctx), 0x5C);
        assert_eq!(cpu.pc(), 0x0201);
    }

    #[test]
    fn indirect_jmp_bug() {
        // Pointer $10FF: low byte from $10FF, high byte from $1000 (not $1100)
        let mut bus = Bus::new();
        bus.write(0x10FF, 0x00);
        bus.write(0x1100, 0x80);
        bus.write(0x1000, 0x40);
        assert_eq!(read_word_indirect_bug(&mut bus, 0x10FF), 0x4000);
        // No wrap when the pointer is not at a page end
        bus.write(0x10FE, 0x22);
        assert_eq!(read_word_indirect_bug(&mut bus, 0x10FE), 0x0022);
    }

    #[test]
    fn operand_lengths() {
        assert_eq!(AddrMode::Implied.operand_len(), 0);
        assert_eq!(AddrMode::Relative.operand_len(), 1);
        assert_eq!(AddrMode::Indirect.operand_len(), 2);
    }
}
