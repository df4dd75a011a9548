/*!
Cartridge image and iNES (v1) loader.

Features:
- Parse the 16-byte iNES header from bytes or a file path
- Skip the optional 512-byte trainer
- Extract PRG ROM (16 KiB units) and CHR ROM (8 KiB units, absent when the header says 0)
- Derive mapper id, nametable mirroring, battery and trainer flags

Notes:
- The header is only interpreted after the buffer length has been checked.
- Bytes past the declared header/trainer/PRG/CHR regions are ignored.
- The image is immutable once built. The bus shares it through an `Rc` and
  never writes into it.
- Only the zero-mapper (NROM) PRG folding rule is applied:
  - 16 KiB PRG (NROM-128): $C000-$FFFF folds onto the same bank as $8000-$BFFF.
  - 32 KiB PRG (NROM-256): $8000-$FFFF addresses the image directly.
*/

use std::fs;
use std::path::Path;

use crate::error::CartridgeError;

pub const INES_MAGIC: [u8; 4] = *b"NES\x1A";
pub const PRG_UNIT: usize = 16 * 1024;
pub const CHR_UNIT: usize = 8 * 1024;
pub const TRAINER_LEN: usize = 512;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InesVersion {
    Ines1,
    Ines2,
}

/// Raw iNES header fields, byte for byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InesHeader {
    pub magic: [u8; 4],
    /// PRG ROM size in 16 KiB units.
    pub prg_units: u8,
    /// CHR ROM size in 8 KiB units (0 => board uses CHR RAM).
    pub chr_units: u8,
    /// Mapper low nibble, mirroring, battery, trainer.
    pub flags6: u8,
    /// Mapper high nibble, VS/PlayChoice, NES 2.0 marker.
    pub flags7: u8,
    pub prg_ram_units: u8,
    pub flags9: u8,
    pub flags10: u8,
    pub padding: [u8; 5],
}

impl InesHeader {
    pub const LEN: usize = 16;

    /// Interpret the first 16 bytes of `data` as a header.
    /// Fails if `data` is shorter than a header; the magic is not checked here.
    pub fn parse(data: &[u8]) -> Result<Self, CartridgeError> {
        let Some(bytes) = data.get(..Self::LEN) else {
            return Err(CartridgeError::TooShort(data.len()));
        };
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[0..4]);
        let mut padding = [0u8; 5];
        padding.copy_from_slice(&bytes[11..16]);
        Ok(Self {
            magic,
            prg_units: bytes[4],
            chr_units: bytes[5],
            flags6: bytes[6],
            flags7: bytes[7],
            prg_ram_units: bytes[8],
            flags9: bytes[9],
            flags10: bytes[10],
            padding,
        })
    }

    #[inline]
    pub fn has_valid_magic(&self) -> bool {
        self.magic == INES_MAGIC
    }

    /// Mapper id: high nibble from flags7, low nibble from flags6.
    #[inline]
    pub fn mapper_id(&self) -> u16 {
        ((self.flags7 & 0xF0) | (self.flags6 >> 4)) as u16
    }

    pub fn mirroring(&self) -> Mirroring {
        if self.flags6 & 0b0000_1000 != 0 {
            Mirroring::FourScreen
        } else if self.flags6 & 0b0000_0001 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }

    #[inline]
    pub fn has_battery(&self) -> bool {
        self.flags6 & 0b0000_0010 != 0
    }

    #[inline]
    pub fn has_trainer(&self) -> bool {
        self.flags6 & 0b0000_0100 != 0
    }

    pub fn version(&self) -> InesVersion {
        if self.flags7 & 0x0C == 0x08 {
            InesVersion::Ines2
        } else {
            InesVersion::Ines1
        }
    }

    #[inline]
    pub fn prg_rom_len(&self) -> usize {
        self.prg_units as usize * PRG_UNIT
    }

    #[inline]
    pub fn chr_rom_len(&self) -> usize {
        self.chr_units as usize * CHR_UNIT
    }
}

/// A validated, read-only cartridge image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cartridge {
    header: InesHeader,
    prg_rom: Vec<u8>,
    chr_rom: Option<Vec<u8>>,

    // Derived metadata
    mapper_id: u16,
    mirroring: Mirroring,
    battery: bool,
    has_trainer: bool,
    ines_version: InesVersion,
}

impl Cartridge {
    // -------------- Construction --------------

    /// Assemble an image from an already-decoded header and storage buffers.
    /// Metadata is derived from the header.
    pub fn new(header: InesHeader, prg_rom: Vec<u8>, chr_rom: Option<Vec<u8>>) -> Self {
        Self {
            mapper_id: header.mapper_id(),
            mirroring: header.mirroring(),
            battery: header.has_battery(),
            has_trainer: header.has_trainer(),
            ines_version: header.version(),
            header,
            prg_rom,
            chr_rom,
        }
    }

    /// Parse raw iNES bytes.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        let header = InesHeader::parse(data)?;
        if !header.has_valid_magic() {
            return Err(CartridgeError::BadMagic(header.magic));
        }
        if header.prg_units == 0 {
            return Err(CartridgeError::EmptyPrg);
        }

        let mut offset = InesHeader::LEN;
        if header.has_trainer() {
            if data.len() < offset + TRAINER_LEN {
                return Err(CartridgeError::MissingTrainer);
            }
            offset += TRAINER_LEN;
        }

        let prg_len = header.prg_rom_len();
        let prg_rom = data
            .get(offset..offset + prg_len)
            .ok_or(CartridgeError::TruncatedPrg {
                expected: prg_len,
                available: data.len() - offset,
            })?
            .to_vec();
        offset += prg_len;

        let chr_len = header.chr_rom_len();
        let chr_rom = if chr_len == 0 {
            None
        } else {
            let chr = data
                .get(offset..offset + chr_len)
                .ok_or(CartridgeError::TruncatedChr {
                    expected: chr_len,
                    available: data.len() - offset,
                })?;
            Some(chr.to_vec())
        };

        let cart = Self::new(header, prg_rom, chr_rom);
        log::debug!(
            "loaded iNES image: mapper {} {:?} mirroring, PRG {} bytes, CHR {} bytes, trainer={}",
            cart.mapper_id,
            cart.mirroring,
            cart.prg_rom.len(),
            cart.chr_rom.as_ref().map_or(0, Vec::len),
            cart.has_trainer
        );
        if cart.mapper_id != 0 {
            log::warn!(
                "mapper {} is not supported; PRG window uses zero-mapper folding",
                cart.mapper_id
            );
        }
        Ok(cart)
    }

    /// Load a cartridge from an iNES file (.nes).
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let bytes = fs::read(path).map_err(|e| CartridgeError::Io(e.to_string()))?;
        Self::from_ines_bytes(&bytes)
    }

    // -------------- CPU PRG window --------------

    /// Read the PRG window ($8000..=$FFFF) with zero-mapper folding:
    /// `offset % prg_len`. An empty PRG buffer reads as 0.
    #[inline]
    pub fn cpu_read_prg(&self, addr: u16) -> u8 {
        if self.prg_rom.is_empty() {
            return 0;
        }
        let offset = addr.wrapping_sub(0x8000) as usize;
        self.prg_rom[offset % self.prg_rom.len()]
    }

    // -------------- Accessors --------------

    pub fn header(&self) -> &InesHeader {
        &self.header
    }

    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    pub fn chr_rom(&self) -> Option<&[u8]> {
        self.chr_rom.as_deref()
    }

    pub fn prg_rom_len(&self) -> usize {
        self.prg_rom.len()
    }

    pub fn mapper_id(&self) -> u16 {
        self.mapper_id
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    pub fn has_battery(&self) -> bool {
        self.battery
    }

    pub fn has_trainer(&self) -> bool {
        self.has_trainer
    }

    pub fn ines_version(&self) -> InesVersion {
        self.ines_version
    }

    /// True if this is an NROM-128 (16 KiB PRG) image.
    pub fn is_nrom_128(&self) -> bool {
        self.prg_rom.len() == PRG_UNIT
    }

    /// True if this is an NROM-256 (32 KiB PRG) image.
    pub fn is_nrom_256(&self) -> bool {
        self.prg_rom.len() == 2 * PRG_UNIT
    }
}
