/// iNES 1.0 view of header bytes 8..=15.
///
/// iNES 1.0 leaves these bytes reserved. Tools of the era wrote them as zero,
/// but plenty of dumps carry leftovers (ripper signatures, NES 2.0 fields
/// written by a tool that forgot to set the format bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct INes10Extension {
    pub reserved: [u8; 8],
}

impl INes10Extension {
    pub(super) fn from_bytes(bytes: &[u8; 8]) -> Self {
        Self { reserved: *bytes }
    }

    /// `true` when every reserved byte is zero, as iNES 1.0 requires.
    pub fn is_clean(&self) -> bool {
        self.reserved.iter().all(|&b| b == 0)
    }
}
