use super::{PpuVariant, TvSystem};

/// NES 2.0 extension bytes (header bytes 8..=15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nes2Extension {
    /// Byte 8 (submapper + mapper high bits).
    pub mapper_msb_submapper: u8,
    /// Byte 9 (PRG/CHR msb nibbles).
    pub prg_chr_msb: u8,
    /// Byte 10 (PRG RAM / PRG NVRAM shifts).
    pub prg_ram_shifts: u8,
    /// Byte 11 (CHR RAM / CHR NVRAM shifts).
    pub chr_ram_shifts: u8,
    /// Byte 12 (timing).
    pub timing: u8,
    /// Byte 13 (PPU / hardware type).
    pub ppu_type: u8,
    /// Byte 14 (misc ROMs).
    pub misc_roms: u8,
    /// Byte 15 (default expansion device).
    pub default_expansion_device: u8,
}

impl Nes2Extension {
    pub(super) fn from_bytes(bytes: &[u8; 8]) -> Self {
        Self {
            mapper_msb_submapper: bytes[0],
            prg_chr_msb: bytes[1],
            prg_ram_shifts: bytes[2],
            chr_ram_shifts: bytes[3],
            timing: bytes[4],
            ppu_type: bytes[5],
            misc_roms: bytes[6],
            default_expansion_device: bytes[7],
        }
    }

    pub fn submapper(&self) -> u8 {
        self.mapper_msb_submapper >> 4
    }

    pub fn mapper_msb(&self) -> u8 {
        self.mapper_msb_submapper & 0x0F
    }

    pub fn prg_rom_msb(&self) -> u8 {
        self.prg_chr_msb & 0x0F
    }

    pub fn chr_rom_msb(&self) -> u8 {
        (self.prg_chr_msb >> 4) & 0x0F
    }

    pub fn tv_system(&self) -> TvSystem {
        TvSystem::from_timing(self.timing)
    }

    pub fn ppu(&self) -> PpuVariant {
        PpuVariant::from_nibble(self.ppu_type & 0x0F)
    }
}
