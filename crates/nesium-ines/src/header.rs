//! iNES / NES 2.0 header codec.
//!
//! The first 16 bytes of every `.nes` ROM are the *iNES header*. It stores how
//! much PRG/CHR data the cartridge carries, which mapper is required, and a few
//! compatibility flags. NES 2.0 reuses the exact same byte layout but gives the
//! trailing eight bytes a meaning, so which rules apply is decided by two bits
//! of byte 7 rather than by the file itself.
//!
//! [`Header`] keeps the raw bytes untouched and decodes every field on demand.
//! Writing a header back out is therefore a plain copy of [`Header::as_bytes`].
//!
//! # Quick overview
//! - Read the first 16 bytes and pass them to [`Header::parse`].
//! - Check [`Header::is_valid`] before trusting anything else.
//! - Use [`Header::prg_size`] / [`Header::chr_size`] (bank counts) to know how
//!   much PRG/CHR data follows the optional trainer.

use crate::error::{Error, Section};

mod console_type;
mod flags6;
mod flags7;
mod ines10_extension;
mod mirroring;
mod nes2_extension;
mod ppu_variant;
mod rom_format;
mod tv_system;

pub use console_type::ConsoleType;
pub use flags6::Flags6;
pub use flags7::Flags7;
pub use ines10_extension::INes10Extension;
pub use mirroring::Mirroring;
pub use nes2_extension::Nes2Extension;
pub use ppu_variant::PpuVariant;
pub use rom_format::RomFormat;
pub use tv_system::TvSystem;

/// "NES" followed by MS-DOS end-of-file.
pub const NES_MAGIC: &[u8; 4] = b"NES\x1A";

/// Size of the fixed iNES header in bytes.
pub const NES_HEADER_LEN: usize = 16;

/// PRG ROM bank size (unit of [`Header::prg_size`]).
pub const PRG_BANK_SIZE: usize = 16 * 1024;

/// CHR ROM bank size (unit of [`Header::chr_size`]).
pub const CHR_BANK_SIZE: usize = 8 * 1024;

/// Format-dependent view of header bytes 8..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    INes10(INes10Extension),
    Nes20(Nes2Extension),
}

/// Decoded view over a raw 16-byte iNES header.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    raw: [u8; NES_HEADER_LEN],
}

impl Header {
    /// Wraps raw header bytes. Nothing is validated here.
    pub const fn from_bytes(raw: [u8; NES_HEADER_LEN]) -> Self {
        Self { raw }
    }

    /// Takes the first 16 bytes of `bytes` as a header.
    ///
    /// Only the length is checked; call [`Header::is_valid`] for the signature.
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        let raw: [u8; NES_HEADER_LEN] = bytes
            .get(..NES_HEADER_LEN)
            .and_then(|head| head.try_into().ok())
            .ok_or(Error::Truncated {
                section: Section::Header,
                expected: NES_HEADER_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self::from_bytes(raw))
    }

    pub fn as_bytes(&self) -> &[u8; NES_HEADER_LEN] {
        &self.raw
    }

    pub fn to_bytes(self) -> [u8; NES_HEADER_LEN] {
        self.raw
    }

    /// `true` when the first four bytes are exactly [`NES_MAGIC`].
    pub fn is_valid(&self) -> bool {
        &self.raw[0..4] == NES_MAGIC
    }

    /// Legacy header carrying data in its reserved bytes.
    ///
    /// Usually a NES 2.0 header written without the format bits, or a ripper
    /// signature in the padding. Worth a warning, never a rejection.
    pub fn is_dirty(&self) -> bool {
        match self.extension() {
            Extension::INes10(ext) => !ext.is_clean(),
            Extension::Nes20(_) => false,
        }
    }

    pub fn flags6(&self) -> Flags6 {
        Flags6::from_bits_retain(self.raw[6])
    }

    pub fn flags7(&self) -> Flags7 {
        Flags7::from_bits_retain(self.raw[7])
    }

    pub fn format(&self) -> RomFormat {
        RomFormat::from_flags7(self.flags7())
    }

    /// Header revision: 2 for NES 2.0, 1 for everything else.
    pub fn version(&self) -> u8 {
        self.format().version()
    }

    pub fn extension(&self) -> Extension {
        let bytes = self.extension_bytes();
        match self.format() {
            RomFormat::INes => Extension::INes10(INes10Extension::from_bytes(bytes)),
            RomFormat::Nes20 => Extension::Nes20(Nes2Extension::from_bytes(bytes)),
        }
    }

    fn extension_bytes(&self) -> &[u8; 8] {
        let [_, _, _, _, _, _, _, _, extension @ ..] = &self.raw;
        extension
    }

    fn nes2(&self) -> Option<Nes2Extension> {
        match self.extension() {
            Extension::Nes20(ext) => Some(ext),
            Extension::INes10(_) => None,
        }
    }

    /// Mapper ID (0 == NROM, 1 == MMC1, ...). 12 bits wide on NES 2.0.
    pub fn mapper(&self) -> u16 {
        let lower = self.flags6().mapper_low() as u16;
        let middle = self.flags7().mapper_high() as u16;
        let upper = self.nes2().map_or(0, |ext| ext.mapper_msb() as u16) << 8;
        lower | middle | upper
    }

    /// NES 2.0 submapper value. Always 0 for legacy iNES files.
    pub fn submapper(&self) -> u8 {
        self.nes2().map_or(0, |ext| ext.submapper())
    }

    /// PRG ROM size in 16 KiB banks.
    pub fn prg_size(&self) -> u16 {
        let msb = self.nes2().map_or(0, |ext| ext.prg_rom_msb() as u16);
        (msb << 8) | self.raw[4] as u16
    }

    /// CHR ROM size in 8 KiB banks. 0 means the board uses CHR RAM.
    pub fn chr_size(&self) -> u16 {
        let msb = self.nes2().map_or(0, |ext| ext.chr_rom_msb() as u16);
        (msb << 8) | self.raw[5] as u16
    }

    /// PRG ROM size in bytes.
    pub fn prg_rom_bytes(&self) -> usize {
        self.prg_size() as usize * PRG_BANK_SIZE
    }

    /// CHR ROM size in bytes.
    pub fn chr_rom_bytes(&self) -> usize {
        self.chr_size() as usize * CHR_BANK_SIZE
    }

    pub fn ppu(&self) -> PpuVariant {
        self.nes2().map_or(PpuVariant::Unknown, |ext| ext.ppu())
    }

    /// Region timing. iNES 1.0 headers carry none and report [`TvSystem::Dual`].
    pub fn tv_system(&self) -> TvSystem {
        self.nes2().map_or(TvSystem::Dual, |ext| ext.tv_system())
    }

    pub fn system(&self) -> ConsoleType {
        ConsoleType::from_flags7(self.flags7())
    }

    pub fn mirroring(&self) -> Mirroring {
        Mirroring::from_flags6(self.flags6())
    }

    /// Whether the optional 512 byte trainer block sits between the header and PRG data.
    pub fn trainer_present(&self) -> bool {
        self.flags6().contains(Flags6::TRAINER)
    }

    /// Battery bit: the cartridge keeps RAM contents when powered off.
    pub fn battery_backed(&self) -> bool {
        self.flags6().contains(Flags6::BATTERY)
    }
}

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Header")
            .field("raw", &self.raw)
            .field("format", &self.format())
            .field("mapper", &self.mapper())
            .field("prg_size", &self.prg_size())
            .field("chr_size", &self.chr_size())
            .finish()
    }
}

impl From<[u8; NES_HEADER_LEN]> for Header {
    fn from(raw: [u8; NES_HEADER_LEN]) -> Self {
        Self::from_bytes(raw)
    }
}
