#![allow(dead_code)]

use std::path::PathBuf;

use nesium_ines::{NES_MAGIC, TRAINER_SIZE};

/// Builds raw iNES files for tests.
#[derive(Debug, Clone, Default)]
pub struct RomBuilder {
    flags6: u8,
    flags7: u8,
    extension: [u8; 8],
    trainer: Option<Vec<u8>>,
    prg: Vec<u8>,
    chr: Vec<u8>,
}

impl RomBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags6(mut self, flags6: u8) -> Self {
        self.flags6 = flags6;
        self
    }

    pub fn flags7(mut self, flags7: u8) -> Self {
        self.flags7 = flags7;
        self
    }

    pub fn extension(mut self, extension: [u8; 8]) -> Self {
        self.extension = extension;
        self
    }

    /// Sets the trainer and the matching flags 6 bit.
    pub fn trainer(mut self, trainer: Vec<u8>) -> Self {
        assert_eq!(trainer.len(), TRAINER_SIZE);
        self.flags6 |= 0b0000_0100;
        self.trainer = Some(trainer);
        self
    }

    /// PRG data; must be a whole number of 16 KiB banks.
    pub fn prg(mut self, prg: Vec<u8>) -> Self {
        assert_eq!(prg.len() % (16 * 1024), 0);
        self.prg = prg;
        self
    }

    /// CHR data; must be a whole number of 8 KiB banks.
    pub fn chr(mut self, chr: Vec<u8>) -> Self {
        assert_eq!(chr.len() % (8 * 1024), 0);
        self.chr = chr;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut rom = NES_MAGIC.to_vec();
        rom.push((self.prg.len() / (16 * 1024)) as u8);
        rom.push((self.chr.len() / (8 * 1024)) as u8);
        rom.push(self.flags6);
        rom.push(self.flags7);
        rom.extend_from_slice(&self.extension);
        if let Some(trainer) = &self.trainer {
            rom.extend_from_slice(trainer);
        }
        rom.extend_from_slice(&self.prg);
        rom.extend_from_slice(&self.chr);
        rom
    }
}

/// Deterministic filler that differs per bank.
pub fn pattern(len: usize, salt: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(salt ^ (i >> 13) as u8))
        .collect()
}

/// Unique scratch path in the system temp directory.
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("nesium-ines-{}-{name}", std::process::id()))
}
