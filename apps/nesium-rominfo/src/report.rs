use std::fmt::{self, Write};

use nesium_ines::{Image, RomFormat};

/// Multi-line human readable summary of `image`.
pub fn describe(image: &Image) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    write_summary(&mut out, image).unwrap_or_default();
    out
}

fn write_summary(out: &mut impl Write, image: &Image) -> fmt::Result {
    let header = image.header();

    let format = match header.format() {
        RomFormat::INes => "iNES 1.0",
        RomFormat::Nes20 => "NES 2.0",
    };
    writeln!(out, "format:      {format}")?;
    writeln!(
        out,
        "mapper:      {} (submapper {})",
        header.mapper(),
        header.submapper()
    )?;
    writeln!(
        out,
        "PRG ROM:     {} x 16 KiB ({} bytes)",
        header.prg_size(),
        image.prg_size()
    )?;
    writeln!(
        out,
        "CHR ROM:     {} x 8 KiB ({} bytes)",
        header.chr_size(),
        image.chr_size()
    )?;
    writeln!(out, "mirroring:   {:?}", header.mirroring())?;
    writeln!(out, "system:      {:?}", header.system())?;
    writeln!(out, "tv system:   {:?}", header.tv_system())?;
    writeln!(out, "ppu:         {:?}", header.ppu())?;
    writeln!(out, "trainer:     {}", yes_no(header.trainer_present()))?;
    writeln!(out, "battery:     {}", yes_no(header.battery_backed()))?;
    if header.is_dirty() {
        writeln!(
            out,
            "warning:     reserved header bytes are not zero: {:02X?}",
            &header.as_bytes()[8..]
        )?;
    }
    writeln!(out, "PRG CRC32:   {:08x}", image.prg_hash())?;
    writeln!(out, "CHR CRC32:   {:08x}", image.chr_hash())?;
    write!(out, "ROM CRC32:   {:08x}", image.rom_hash())
}

/// `prg chr rom` hashes on one line.
pub fn hash_line(image: &Image) -> String {
    format!(
        "{:08x} {:08x} {:08x}",
        image.prg_hash(),
        image.chr_hash(),
        image.rom_hash()
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
