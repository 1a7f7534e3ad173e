/// PPU revision recorded in NES 2.0 byte 13 (low nibble).
///
/// Only the palette differs between most of these; the value is carried for
/// compatibility databases and never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PpuVariant {
    /// Not recorded, reserved, or an iNES 1.0 header.
    Unknown,
    /// $0: RP2C03B, standard RGB palette.
    Rp2c03b,
    /// $1: RP2C03G.
    Rp2c03g,
    /// $2: RP2C04-0001 (scrambled palette).
    Rp2c04_0001,
    /// $3: RP2C04-0002.
    Rp2c04_0002,
    /// $4: RP2C04-0003.
    Rp2c04_0003,
    /// $5: RP2C04-0004.
    Rp2c04_0004,
    /// $6: RC2C03B.
    Rc2c03b,
    /// $7: RC2C03C.
    Rc2c03c,
    /// $8: RC2C05-01 (normal palette, different `$2002` bits).
    Rc2c05_01,
    /// $9: RC2C05-02.
    Rc2c05_02,
    /// $A: RC2C05-03.
    Rc2c05_03,
    /// $B: RC2C05-04.
    Rc2c05_04,
    /// $C: RC2C05-05.
    Rc2c05_05,
}

const PPU_TABLE: [PpuVariant; 16] = [
    PpuVariant::Rp2c03b,
    PpuVariant::Rp2c03g,
    PpuVariant::Rp2c04_0001,
    PpuVariant::Rp2c04_0002,
    PpuVariant::Rp2c04_0003,
    PpuVariant::Rp2c04_0004,
    PpuVariant::Rc2c03b,
    PpuVariant::Rc2c03c,
    PpuVariant::Rc2c05_01,
    PpuVariant::Rc2c05_02,
    PpuVariant::Rc2c05_03,
    PpuVariant::Rc2c05_04,
    PpuVariant::Rc2c05_05,
    PpuVariant::Unknown,
    PpuVariant::Unknown,
    PpuVariant::Unknown,
];

impl PpuVariant {
    pub fn from_nibble(nibble: u8) -> Self {
        PPU_TABLE[(nibble & 0x0F) as usize]
    }
}
