use super::Flags6;

/// Layout mirroring type for the PPU nametables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirroring {
    /// Two horizontal nametables that mirror vertically.
    Horizontal,
    /// Two vertical nametables that mirror horizontally.
    Vertical,
    /// Cartridge supplies its own four nametables.
    FourScreen,
}

impl Mirroring {
    /// The four-screen bit overrides the H/V bit whatever its value.
    pub(super) fn from_flags6(flags6: Flags6) -> Self {
        if flags6.contains(Flags6::FOUR_SCREEN) {
            Self::FourScreen
        } else if flags6.contains(Flags6::MIRRORING) {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}
