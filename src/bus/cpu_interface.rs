/*!
CPU interface dispatcher

Purpose
- Centralize CPU-visible memory mapping and delegate to the owning storage.
- Provide a single place to evolve address decoding without touching the Bus façade.

Address map (summary):
- $0000-$1FFF: work RAM, `addr & 0x07FF`
- $2000-$3FFF: PPU register window, `addr & 0x0007` (stub)
- $4000-$7FFF: unmapped (APU/IO, expansion, mapper registers, save RAM)
- $8000-$FFFF: cartridge PRG, `(addr - 0x8000) % prg_len`

Notes
- $4020-$7FFF belongs to the cartridge on real hardware. Until a mapper
  abstraction exists it behaves like the default branch.
- Writes into the cartridge window are ignored (the zero mapper has no registers).
*/

use crate::bus::Bus;
use crate::bus::ppu_registers::mirror_ppu_reg;

/// The region an address decodes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Region {
    /// Work RAM; carries the physical index (0..0x800).
    Ram(u16),
    /// PPU register window; carries the register number (0..8).
    PpuRegister(u8),
    /// Cartridge PRG window; carries the offset from $8000.
    Cartridge(u16),
    /// Everything else: reads 0, writes ignored.
    Unmapped,
}

/// Decode a CPU address.
#[inline]
pub fn region_of(addr: u16) -> Region {
    match addr {
        0x0000..=0x1FFF => Region::Ram(addr & 0x07FF),
        0x2000..=0x3FFF => Region::PpuRegister(mirror_ppu_reg(addr)),
        0x8000..=0xFFFF => Region::Cartridge(addr - 0x8000),
        _ => Region::Unmapped,
    }
}

/// CPU-visible read from the unified address space.
pub fn cpu_read(bus: &mut Bus, addr: u16) -> u8 {
    match region_of(addr) {
        Region::Ram(_) => bus.ram().read(addr),
        Region::PpuRegister(reg) => bus.ppu_regs_mut().read(reg),
        Region::Cartridge(_) => match bus.cartridge() {
            Some(cart) => cart.cpu_read_prg(addr),
            None => 0,
        },
        Region::Unmapped => 0,
    }
}

/// CPU-visible write to the unified address space.
pub fn cpu_write(bus: &mut Bus, addr: u16, value: u8) {
    match region_of(addr) {
        Region::Ram(_) => bus.ram_mut().write(addr, value),
        Region::PpuRegister(reg) => bus.ppu_regs_mut().write(reg, value),
        Region::Cartridge(_) => {
            // NROM has no PRG registers or save RAM; ignore writes.
        }
        Region::Unmapped => {}
    }
}

/// Little-endian word read used by CPU vectors.
pub fn cpu_read_word(bus: &mut Bus, addr: u16) -> u16 {
    let lo = cpu_read(bus, addr) as u16;
    let hi = cpu_read(bus, addr.wrapping_add(1)) as u16;
    (hi << 8) | lo
}
