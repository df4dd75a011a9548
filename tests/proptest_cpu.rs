//! Property-based tests for CPU invariants.
//!
//! Programs are placed in work RAM at $0300 on a bus without a cartridge,
//! and the CPU is pointed at them directly.

use nescore::cpu::{AddrMode, CARRY, NEGATIVE, OVERFLOW, Op, ZERO, lookup};
use nescore::{Bus, Cpu, CpuError};
use proptest::prelude::*;

const ORIGIN: u16 = 0x0300;

fn load(code: &[u8]) -> (Cpu, Bus) {
    let mut bus = Bus::new();
    for (i, b) in code.iter().enumerate() {
        bus.write(ORIGIN + i as u16, *b);
    }
    let mut cpu = Cpu::new();
    cpu.set_pc(ORIGIN);
    (cpu, bus)
}

/// Opcodes whose only PC effect is stepping over their own encoding.
fn straight_line_opcodes() -> Vec<u8> {
    (0..=255u8)
        .filter(|&o| {
            let ins = lookup(o);
            ins.mode != AddrMode::Relative
                && !matches!(
                    ins.op,
                    Op::Jmp | Op::Jsr | Op::Rts | Op::Rti | Op::Brk | Op::Jam
                )
        })
        .collect()
}

proptest! {
    /// Property: for non-branching instructions, PC advances by the encoded length
    #[test]
    fn pc_advances_by_length(
        opcode in prop::sample::select(straight_line_opcodes()),
        lo: u8,
        hi in 0u8..0x08,
        x: u8,
        y: u8,
    ) {
        let (mut cpu, mut bus) = load(&[opcode, lo, hi]);
        cpu.set_x(x);
        cpu.set_y(y);
        let ins = lookup(opcode);
        let cycles = cpu.step(&mut bus).expect("straight-line opcode");
        prop_assert_eq!(cpu.pc(), ORIGIN + ins.len());
        prop_assert!(cycles == ins.cycles as u32 || cycles == ins.cycles as u32 + 1);
    }

    /// Property: ADC matches the 9-bit sum and the sign-mismatch overflow rule
    #[test]
    fn adc_flags(a: u8, m: u8, carry: bool) {
        let (mut cpu, mut bus) = load(&[0x69, m]);
        cpu.set_a(a);
        cpu.set_flag(CARRY, carry);
        cpu.step(&mut bus).unwrap();

        let sum = a as u16 + m as u16 + carry as u16;
        let result = sum as u8;
        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(cpu.get_flag(CARRY), sum > 0xFF);
        prop_assert_eq!(cpu.get_flag(ZERO), result == 0);
        prop_assert_eq!(cpu.get_flag(NEGATIVE), result & 0x80 != 0);
        prop_assert_eq!(cpu.get_flag(OVERFLOW), (!(a ^ m) & (a ^ result) & 0x80) != 0);
    }

    /// Property: SBC equals ADC of the one's complement
    #[test]
    fn sbc_is_adc_of_complement(a: u8, m: u8, carry: bool) {
        let (mut sub, mut bus_s) = load(&[0xE9, m]);
        sub.set_a(a);
        sub.set_flag(CARRY, carry);
        sub.step(&mut bus_s).unwrap();

        let (mut add, mut bus_a) = load(&[0x69, !m]);
        add.set_a(a);
        add.set_flag(CARRY, carry);
        add.step(&mut bus_a).unwrap();

        prop_assert_eq!(sub.a(), add.a());
        prop_assert_eq!(sub.status(), add.status());
    }

    /// Property: CMP sets C on unsigned >=, Z on equality, N from bit 7 of
    /// the difference, and leaves A alone
    #[test]
    fn cmp_flags(a: u8, m: u8) {
        let (mut cpu, mut bus) = load(&[0xC9, m]);
        cpu.set_a(a);
        cpu.step(&mut bus).unwrap();
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.get_flag(CARRY), a >= m);
        prop_assert_eq!(cpu.get_flag(ZERO), a == m);
        prop_assert_eq!(cpu.get_flag(NEGATIVE), a.wrapping_sub(m) & 0x80 != 0);
    }

    /// Property: a pushed byte comes back unchanged and SP is restored
    #[test]
    fn pha_pla_round_trip(a: u8, sp in 0x10u8..=0xFF) {
        // PHA; LDA #$00; PLA
        let (mut cpu, mut bus) = load(&[0x48, 0xA9, 0x00, 0x68]);
        cpu.set_a(a);
        cpu.set_sp(sp);
        cpu.run(&mut bus, 3).unwrap();
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(cpu.get_flag(ZERO), a == 0);
    }

    /// Property: every JAM opcode halts with PC left on the opcode
    #[test]
    fn jam_halts(opcode in prop::sample::select(
        (0..=255u8).filter(|&o| lookup(o).op == Op::Jam).collect::<Vec<_>>()
    )) {
        let (mut cpu, mut bus) = load(&[opcode]);
        prop_assert_eq!(cpu.step(&mut bus), Err(CpuError::Jammed { opcode, pc: ORIGIN }));
        prop_assert!(cpu.is_halted());
        prop_assert_eq!(cpu.pc(), ORIGIN);
        prop_assert_eq!(cpu.total_cycles(), 0);
    }
}
