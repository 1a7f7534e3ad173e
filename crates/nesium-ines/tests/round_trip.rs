mod common;

use anyhow::Result;
use common::{RomBuilder, pattern, scratch_path};
use nesium_ines::{Compression, Error, Mirroring, RomFormat, Section, load_bytes, load_file_with};
use proptest::prelude::*;

#[test]
fn load_write_load_preserves_sections() -> Result<()> {
    let rom = RomBuilder::new()
        .flags6(0b0001_0001)
        .trainer(pattern(512, 1))
        .prg(pattern(3 * 16 * 1024, 2))
        .chr(pattern(3 * 8 * 1024, 3))
        .build();

    let first = load_bytes(&rom)?;
    let written = first.to_bytes();
    let second = load_bytes(&written)?;

    assert_eq!(written, rom);
    assert_eq!(second.header(), first.header());
    assert_eq!(second.trainer(), first.trainer());
    assert_eq!(second.prg_rom(), first.prg_rom());
    assert_eq!(second.chr_rom(), first.chr_rom());
    assert_eq!(second.rom_hash(), first.rom_hash());
    Ok(())
}

#[test]
fn nes2_header_round_trips_through_a_file() -> Result<()> {
    let rom = RomBuilder::new()
        .flags6(0b0000_1000)
        .flags7(0b0000_1000)
        .extension([0x10, 0, 0, 0, 0x01, 0x03, 0, 0])
        .prg(pattern(16 * 1024, 9))
        .build();
    let path = scratch_path("nes2.nes");
    std::fs::write(&path, &rom)?;

    let image = load_file_with(&path, Compression::None)?;
    let out = scratch_path("nes2-out.nes");
    nesium_ines::save(&image, &out)?;
    let saved = std::fs::read(&out)?;
    std::fs::remove_file(&path)?;
    std::fs::remove_file(&out)?;

    assert_eq!(saved, rom);
    let header = image.header();
    assert_eq!(header.format(), RomFormat::Nes20);
    assert_eq!(header.submapper(), 1);
    assert_eq!(header.mirroring(), Mirroring::FourScreen);
    assert!(!header.is_dirty());
    Ok(())
}

#[test]
fn dirty_header_still_loads() -> Result<()> {
    let rom = RomBuilder::new()
        .extension(*b"\0\0\0\0DISK")
        .prg(pattern(16 * 1024, 4))
        .build();

    let image = load_bytes(&rom)?;

    assert!(image.header().is_dirty());
    assert_eq!(image.header().version(), 1);
    Ok(())
}

#[test]
fn truncated_file_reports_missing_section() {
    let rom = RomBuilder::new()
        .prg(pattern(2 * 16 * 1024, 5))
        .chr(pattern(8 * 1024, 6))
        .build();

    let err = load_bytes(&rom[..rom.len() - 8 * 1024 - 1]).unwrap_err();
    assert!(matches!(
        err,
        Error::Truncated {
            section: Section::Program,
            expected: 32768,
            actual: 32767,
        }
    ));
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

    #[test]
    fn round_trip_is_byte_identical(
        prg_banks in 1usize..=5,
        chr_banks in 0usize..=3,
        flags6 in any::<u8>(),
        seed in any::<u8>(),
    ) {
        // Trainer presence follows the random flags.
        let mut builder = RomBuilder::new()
            .flags6(flags6 & !0b0000_0100)
            .prg(pattern(prg_banks * 16 * 1024, seed))
            .chr(pattern(chr_banks * 8 * 1024, seed.wrapping_add(1)));
        if flags6 & 0b0000_0100 != 0 {
            builder = builder.trainer(pattern(512, seed.wrapping_add(2)));
        }
        let rom = builder.build();

        let image = load_bytes(&rom).expect("image loads");
        prop_assert_eq!(image.to_bytes(), rom);

        let prg_buffer = image.prg_buffer().expect("PRG allocated");
        prop_assert!(prg_buffer.len().is_power_of_two());
        prop_assert!(prg_buffer.len() >= image.prg_size());
        if let Some(chr_buffer) = image.chr_buffer() {
            prop_assert!(chr_buffer[image.chr_size()..].iter().all(|&b| b == 0xFF));
        }
    }
}
