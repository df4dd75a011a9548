use std::rc::Rc;

use crate::bus::Bus;
use crate::cartridge::{Cartridge, InesHeader, PRG_UNIT};
use crate::test_utils::build_ines;

fn cart_with_prg(prg: Vec<u8>) -> Rc<Cartridge> {
    let units = prg.len() / PRG_UNIT;
    let header = InesHeader::parse(&build_ines(units, 0, 0, 0, 0, None)).expect("header");
    Rc::new(Cartridge::new(header, prg, None))
}

/// Bit 14 of the offset is folded into every byte so the two halves of a
/// 32 KiB image never match.
fn patterned_prg(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i ^ (i >> 8) ^ (i >> 14)) as u8).collect()
}

#[test]
fn ram_mirroring() {
    let mut bus = Bus::new();

    bus.write(0x0000, 0xA5);
    assert_eq!(bus.read(0x0000), 0xA5);
    assert_eq!(bus.read(0x0800), 0xA5);
    assert_eq!(bus.read(0x1000), 0xA5);
    assert_eq!(bus.read(0x1800), 0xA5);

    // Reverse: write the last mirrored byte, read the last physical byte.
    bus.write(0x1FFF, 0x42);
    assert_eq!(bus.read(0x07FF), 0x42);
}

#[test]
fn ppu_window_is_stubbed() {
    let mut bus = Bus::new();
    bus.write(0x2000, 0x80);
    bus.write(0x2008, 0x80);
    assert_eq!(bus.read(0x2000), 0);
    assert_eq!(bus.read(0x3FFF), 0);
    // Writes in the window never leak into RAM
    assert!(bus.ram().as_slice().iter().all(|&b| b == 0));
}

#[test]
fn unmapped_space_reads_zero_and_ignores_writes() {
    let cart = cart_with_prg(vec![0x11; PRG_UNIT]);
    let mut bus = Bus::with_cartridge(cart);
    for addr in [0x4000u16, 0x4016, 0x4020, 0x6000, 0x7FFF] {
        bus.write(addr, 0x99);
        assert_eq!(bus.read(addr), 0, "addr {addr:04X}");
    }
}

#[test]
fn no_cartridge_window_reads_zero() {
    let mut bus = Bus::new();
    assert!(!bus.has_cartridge());
    assert_eq!(bus.read(0x8000), 0);
    assert_eq!(bus.read(0xFFFC), 0);
    bus.write(0x8000, 0x12);
    assert_eq!(bus.read(0x8000), 0);
}

#[test]
fn nrom_128_folds_every_offset() {
    let prg = patterned_prg(PRG_UNIT);
    let mut bus = Bus::with_cartridge(cart_with_prg(prg.clone()));
    for off in 0..PRG_UNIT as u16 {
        let lo = bus.read(0x8000 + off);
        let hi = bus.read(0xC000 + off);
        assert_eq!(lo, hi, "offset {off:04X}");
        assert_eq!(lo, prg[off as usize]);
    }
}

#[test]
fn nrom_256_halves_differ() {
    let prg = patterned_prg(2 * PRG_UNIT);
    let mut bus = Bus::with_cartridge(cart_with_prg(prg.clone()));
    assert_eq!(bus.read(0xC000), prg[PRG_UNIT]);
    let differing = (0..PRG_UNIT as u16)
        .filter(|&off| bus.read(0x8000 + off) != bus.read(0xC000 + off))
        .count();
    assert!(differing > PRG_UNIT / 2);
}

#[test]
fn cartridge_writes_ignored() {
    let mut bus = Bus::with_cartridge(cart_with_prg(vec![0x77; PRG_UNIT]));
    bus.write(0x8000, 0x00);
    bus.write(0xFFFF, 0x00);
    assert_eq!(bus.read(0x8000), 0x77);
    assert_eq!(bus.read(0xFFFF), 0x77);
}

#[test]
fn reset_vector_read_from_cartridge() {
    let mut prg = vec![0u8; PRG_UNIT];
    prg[0x3FFC] = 0x04;
    prg[0x3FFD] = 0xC0;
    let mut bus = Bus::with_cartridge(cart_with_prg(prg));
    assert_eq!(bus.read_word(0xFFFC), 0xC004);
}

#[test]
fn attach_detach_and_share() {
    let cart = cart_with_prg(vec![0x5A; PRG_UNIT]);
    let mut a = Bus::with_cartridge(Rc::clone(&cart));
    let mut b = Bus::with_cartridge(Rc::clone(&cart));
    assert_eq!(a.read(0x8000), 0x5A);
    assert_eq!(b.read(0xC123), 0x5A);
    assert_eq!(Rc::strong_count(&cart), 3);

    let taken = a.detach_cartridge().expect("attached");
    assert!(Rc::ptr_eq(&taken, &cart));
    assert_eq!(a.read(0x8000), 0);
    assert!(a.detach_cartridge().is_none());
}

#[test]
fn reset_clears_ram_keeps_cartridge() {
    let mut bus = Bus::with_cartridge(cart_with_prg(vec![0x01; PRG_UNIT]));
    bus.write(0x0100, 0xFF);
    bus.reset();
    assert_eq!(bus.read(0x0100), 0);
    assert_eq!(bus.read(0x8000), 0x01);
}
