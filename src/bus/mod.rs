#![doc = r#"
Bus module: CPU address-space decoder.

Address map (CPU):
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)
- $2000-$2007: PPU registers (stub window: reads 0, writes ignored)
- $2008-$3FFF: Mirrors of $2000-$2007 (mask with & 0x0007)
- $4000-$7FFF: APU/IO, expansion, mapper registers and save RAM (unmapped here: reads 0, writes ignored)
- $8000-$FFFF: Cartridge PRG ROM (zero-mapper folding; reads 0 with no cartridge)

Modules and responsibilities
- Bus: public façade implemented directly in this module; owns work RAM and a shared handle to the cartridge.
- cpu_interface: the region decoder (read/write/read_word) that every CPU access goes through.
- ram: the 2 KiB work RAM with mirrored access.
- ppu_registers: the video-unit register window stub.

Every address resolves to exactly one region; there is no error path.
"#]

use std::rc::Rc;

use crate::cartridge::Cartridge;

pub mod cpu_interface;
pub mod ppu_registers;
pub mod ram;

#[cfg(test)]
mod tests;

pub use cpu_interface::{Region, cpu_read, cpu_read_word, cpu_write, region_of};
pub use ppu_registers::PpuRegisters;
pub use ram::{CPU_RAM_SIZE, Ram};

pub struct Bus {
    // 2 KiB CPU RAM
    ram: Ram,

    // Video-unit register window (stubbed)
    ppu_regs: PpuRegisters,

    // Cartridge (PRG ROM); shared, never written through the bus
    cartridge: Option<Rc<Cartridge>>,
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    /// Bus with zeroed work RAM and no cartridge.
    pub fn new() -> Self {
        Self {
            ram: Ram::new(),
            ppu_regs: PpuRegisters,
            cartridge: None,
        }
    }

    pub fn with_cartridge(cart: Rc<Cartridge>) -> Self {
        let mut bus = Self::new();
        bus.attach_cartridge(cart);
        bus
    }

    /// Clear work RAM. The attached cartridge stays attached.
    pub fn reset(&mut self) {
        self.ram.reset();
    }

    pub fn attach_cartridge(&mut self, cart: Rc<Cartridge>) {
        log::debug!(
            "cartridge attached: mapper {}, PRG {} bytes",
            cart.mapper_id(),
            cart.prg_rom_len()
        );
        self.cartridge = Some(cart);
    }

    /// Remove the cartridge, returning the handle if one was attached.
    pub fn detach_cartridge(&mut self) -> Option<Rc<Cartridge>> {
        let cart = self.cartridge.take();
        if cart.is_some() {
            log::debug!("cartridge detached");
        }
        cart
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_deref()
    }

    pub fn has_cartridge(&self) -> bool {
        self.cartridge.is_some()
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    #[inline]
    pub fn read(&mut self, addr: u16) -> u8 {
        cpu_read(self, addr)
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        cpu_write(self, addr, value)
    }

    /// Little-endian word read (vectors). The high byte comes from `addr + 1`
    /// with 16-bit wraparound.
    #[inline]
    pub fn read_word(&mut self, addr: u16) -> u16 {
        cpu_read_word(self, addr)
    }

    // -----------------------------
    // Restricted accessors for the decoder
    // -----------------------------

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    pub(in crate::bus) fn ram_mut(&mut self) -> &mut Ram {
        &mut self.ram
    }

    pub(in crate::bus) fn ppu_regs_mut(&mut self) -> &mut PpuRegisters {
        &mut self.ppu_regs
    }
}
