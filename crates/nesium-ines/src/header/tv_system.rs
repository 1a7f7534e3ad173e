/// Video timing hints embedded in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvSystem {
    /// NTSC (60Hz) timing.
    Ntsc,
    /// PAL (50Hz) timing.
    Pal,
    /// Runs on either timing. Also reported when the header carries no timing
    /// information at all (iNES 1.0).
    Dual,
}

impl TvSystem {
    /// NES 2.0 byte 12 bits 0..=1.
    pub(super) fn from_timing(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Ntsc,
            1 => Self::Pal,
            _ => Self::Dual,
        }
    }
}
