/*!
load_store.rs - Load/Store opcode family handler

Handles:
- LDA / LDX / LDY (all addressing modes; indexed reads may take the page-cross cycle)
- STA / STX / STY (all addressing modes; writes never take it)

The addressing stage has already resolved `ctx.addr_abs`; this handler only
reads or writes it.
*/

use crate::bus::Bus;
use crate::cpu::addressing::fetch;
use crate::cpu::context::StepContext;
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Op;

/// Execute a load/store operation.
///
/// Returns:
/// - Some(may_add_cycle) if `op` belongs to this family
/// - None otherwise
pub(super) fn handle<C: CpuRegs>(
    op: Op,
    cpu: &mut C,
    bus: &mut Bus,
    ctx: &mut StepContext,
) -> Option<bool> {
    match op {
        Op::Lda => {
            let v = fetch(bus, ctx);
            lda(cpu, v);
            Some(true)
        }
        Op::Ldx => {
            let v = fetch(bus, ctx);
            ldx(cpu, v);
            Some(true)
        }
        Op::Ldy => {
            let v = fetch(bus, ctx);
            ldy(cpu, v);
            Some(true)
        }
        Op::Sta => {
            bus.write(ctx.addr_abs, cpu.a());
            Some(false)
        }
        Op::Stx => {
            bus.write(ctx.addr_abs, cpu.x());
            Some(false)
        }
        Op::Sty => {
            bus.write(ctx.addr_abs, cpu.y());
            Some(false)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{NEGATIVE, ZERO};
    use crate::test_utils::setup;

    #[test]
    fn lda_immediate_flags() {
        // LDA #$00 ; LDA #$80
        let (mut cpu, mut bus) = setup(&[0xA9, 0x00, 0xA9, 0x80]);
        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.get_flag(ZERO));
        assert!(!cpu.get_flag(NEGATIVE));

        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a(), 0x80);
        assert!(!cpu.get_flag(ZERO));
        assert!(cpu.get_flag(NEGATIVE));
    }

    #[test]
    fn lda_abs_x_page_cross_adds_cycle() {
        // LDX #$10 ; LDA $02F5,X (-> $0305, crosses) ; LDA $0200,X (no cross)
        let (mut cpu, mut bus) = setup(&[0xA2, 0x10, 0xBD, 0xF5, 0x02, 0xBD, 0x00, 0x02]);
        bus.write(0x0305, 0x77);
        bus.write(0x0210, 0x66);
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.step(&mut bus).unwrap(), 5);
        assert_eq!(cpu.a(), 0x77);
        assert_eq!(cpu.step(&mut bus).unwrap(), 4);
        assert_eq!(cpu.a(), 0x66);
    }

    #[test]
    fn lda_indirect_y_page_cross_adds_cycle() {
        // LDY #$01 ; LDA ($40),Y with pointer $03FF -> $0400
        let (mut cpu, mut bus) = setup(&[0xA0, 0x01, 0xB1, 0x40]);
        bus.write(0x0040, 0xFF);
        bus.write(0x0041, 0x03);
        bus.write(0x0400, 0x99);
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.step(&mut bus).unwrap(), 6);
        assert_eq!(cpu.a(), 0x99);
    }

    #[test]
    fn ldx_zero_page_y_wraps() {
        // LDY #$20 ; LDX $F0,Y -> $0010
        let (mut cpu, mut bus) = setup(&[0xA0, 0x20, 0xB6, 0xF0]);
        bus.write(0x0010, 0x5A);
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.step(&mut bus).unwrap(), 4);
        assert_eq!(cpu.x(), 0x5A);
    }

    #[test]
    fn sta_abs_x_never_takes_page_cycle() {
        // LDA #$42 ; LDX #$10 ; STA $02F5,X
        let (mut cpu, mut bus) = setup(&[0xA9, 0x42, 0xA2, 0x10, 0x9D, 0xF5, 0x02]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.step(&mut bus).unwrap(), 5);
        assert_eq!(bus.read(0x0305), 0x42);
    }

    #[test]
    fn stores_do_not_touch_flags() {
        // LDX #$00 (Z=1) ; STX $10 ; LDY #$80 ; STY $11
        let (mut cpu, mut bus) = setup(&[0xA2, 0x00, 0x86, 0x10, 0xA0, 0x80, 0x84, 0x11]);
        bus.write(0x0010, 0xFF);
        cpu.step(&mut bus).unwrap();
        let p = cpu.status();
        assert_eq!(cpu.step(&mut bus).unwrap(), 3);
        assert_eq!(cpu.status(), p);
        assert_eq!(bus.read(0x0010), 0x00);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(bus.read(0x0011), 0x80);
    }
}
