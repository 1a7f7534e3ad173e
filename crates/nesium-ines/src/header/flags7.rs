use bitflags::bitflags;

bitflags! {
    /// Header byte 7: `%NNNN.VVPU` (`VV == 10b` marks NES 2.0).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags7: u8 {
        const VS_UNISYSTEM     = 0b0000_0001;
        const PLAYCHOICE_10    = 0b0000_0010;
        const NES2_DETECTION   = 0b0000_1100;
        const MAPPER_HIGH_MASK = 0b1111_0000;
    }
}

impl Flags7 {
    /// Mapper bits 4..=7, left in place.
    pub fn mapper_high(self) -> u8 {
        (self & Self::MAPPER_HIGH_MASK).bits()
    }

    /// Raw value of the two format detection bits (`0b10` for NES 2.0).
    pub fn format_bits(self) -> u8 {
        (self & Self::NES2_DETECTION).bits() >> 2
    }
}
