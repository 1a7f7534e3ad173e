use crate::{
    hash::{crc32, crc32_chain},
    header::Header,
};

/// Size of the optional trainer block.
pub const TRAINER_SIZE: usize = 512;

/// A decoded cartridge image.
///
/// PRG and CHR buffers are allocated at a power-of-two size so a downstream
/// core can decode addresses with a plain mask. The logical sizes declared by
/// the header are tracked separately: only those bytes are hashed and
/// written back out.
///
/// Images come from [`crate::load`] and friends and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    header: Header,
    trainer: Option<Box<[u8; TRAINER_SIZE]>>,
    prg_rom: Option<Box<[u8]>>,
    chr_rom: Option<Box<[u8]>>,
    prg_size: usize,
    chr_size: usize,
}

impl Image {
    pub(crate) fn new(
        header: Header,
        trainer: Option<Box<[u8; TRAINER_SIZE]>>,
        prg_rom: Option<Box<[u8]>>,
        chr_rom: Option<Box<[u8]>>,
    ) -> Self {
        Self {
            prg_size: header.prg_rom_bytes(),
            chr_size: header.chr_rom_bytes(),
            header,
            trainer,
            prg_rom,
            chr_rom,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn trainer(&self) -> Option<&[u8; TRAINER_SIZE]> {
        self.trainer.as_deref()
    }

    /// Logical PRG ROM size in bytes.
    pub fn prg_size(&self) -> usize {
        self.prg_size
    }

    /// Logical CHR ROM size in bytes. 0 for CHR RAM boards.
    pub fn chr_size(&self) -> usize {
        self.chr_size
    }

    /// PRG ROM bytes as stored in the file.
    pub fn prg_rom(&self) -> &[u8] {
        logical(self.prg_rom.as_deref(), self.prg_size)
    }

    /// CHR ROM bytes as stored in the file. Empty for CHR RAM boards.
    pub fn chr_rom(&self) -> &[u8] {
        logical(self.chr_rom.as_deref(), self.chr_size)
    }

    /// Whole padded PRG allocation. Past the logical size the last 8 KiB bank
    /// is mirrored when the pad is larger than one bank, zeroes otherwise.
    pub fn prg_buffer(&self) -> Option<&[u8]> {
        self.prg_rom.as_deref()
    }

    /// Whole padded CHR allocation; padding is `0xFF`.
    pub fn chr_buffer(&self) -> Option<&[u8]> {
        self.chr_rom.as_deref()
    }

    pub fn prg_hash(&self) -> u32 {
        crc32(self.prg_rom(), 0)
    }

    pub fn chr_hash(&self) -> u32 {
        crc32(self.chr_rom(), 0)
    }

    /// CRC32 chained over trainer, PRG and CHR, in that order.
    pub fn rom_hash(&self) -> u32 {
        crc32_chain([
            self.trainer().map(|trainer| trainer.as_slice()),
            self.prg_rom.as_ref().map(|_| self.prg_rom()),
            self.chr_rom.as_ref().map(|_| self.chr_rom()),
        ])
    }
}

fn logical(buffer: Option<&[u8]>, size: usize) -> &[u8] {
    match buffer {
        Some(buffer) => &buffer[..size.min(buffer.len())],
        None => &[],
    }
}
