use super::Flags7;

/// Console type advertised by header byte 7 bits 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleType {
    /// Standard NES/Famicom cartridge.
    Nes,
    /// Vs. System arcade hardware.
    VsSystem,
    /// PlayChoice-10 hardware.
    PlayChoice10,
}

impl ConsoleType {
    /// Both arcade bits set is not a valid combination and reads as a plain NES.
    pub(super) fn from_flags7(flags7: Flags7) -> Self {
        let vs = flags7.contains(Flags7::VS_UNISYSTEM);
        let playchoice = flags7.contains(Flags7::PLAYCHOICE_10);
        match (vs, playchoice) {
            (true, false) => Self::VsSystem,
            (false, true) => Self::PlayChoice10,
            _ => Self::Nes,
        }
    }
}
