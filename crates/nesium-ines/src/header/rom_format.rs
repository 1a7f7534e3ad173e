use super::Flags7;

/// Identifies the header flavour encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomFormat {
    /// The original iNES 1.0 layout. Also covers archaic dumps whose
    /// detection bits are neither `00b` nor `10b`.
    INes,
    /// NES 2.0 with extended sizing and metadata fields.
    Nes20,
}

impl RomFormat {
    pub(super) fn from_flags7(flags7: Flags7) -> Self {
        match flags7.format_bits() {
            0b10 => Self::Nes20,
            _ => Self::INes,
        }
    }

    /// Header revision number: 1 for iNES, 2 for NES 2.0.
    pub fn version(self) -> u8 {
        match self {
            Self::INes => 1,
            Self::Nes20 => 2,
        }
    }
}
