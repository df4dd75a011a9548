#![doc = r#"
PPU registers window

Purpose
- Entry point for CPU-visible PPU register access (0x2000-0x3FFF).
- The video unit is an external collaborator that is not wired in yet, so the
  window is a stub: every register reads 0 and every write is dropped.

Notes
- Mirroring: addresses 0x2008..=0x3FFF mirror 0x2000..=0x2007; the decoder
  hands this type the register number (0..8) already masked.
"#]

/// Register numbers within the 8-register window.
pub const PPUCTRL: u8 = 0;
pub const PPUMASK: u8 = 1;
pub const PPUSTATUS: u8 = 2;
pub const OAMADDR: u8 = 3;
pub const OAMDATA: u8 = 4;
pub const PPUSCROLL: u8 = 5;
pub const PPUADDR: u8 = 6;
pub const PPUDATA: u8 = 7;

/// Stub handler for the CPU-visible PPU register window.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpuRegisters;

impl PpuRegisters {
    /// Read register `reg` (0..8). Always 0 until a PPU is attached.
    #[inline]
    pub fn read(&mut self, reg: u8) -> u8 {
        debug_assert!(reg <= PPUDATA);
        0
    }

    /// Write register `reg` (0..8). Ignored until a PPU is attached.
    #[inline]
    pub fn write(&mut self, reg: u8, _value: u8) {
        debug_assert!(reg <= PPUDATA);
    }
}

/// Fold any address in 0x2000..=0x3FFF onto its register number.
#[inline]
pub fn mirror_ppu_reg(addr: u16) -> u8 {
    (addr & 0x0007) as u8
}
