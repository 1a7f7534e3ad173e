//! Reads iNES images from a byte stream.
//!
//! The loader reads the header, then exactly the trainer/PRG/CHR byte counts
//! it declares, and lays each section out in a power-of-two buffer:
//!
//! - PRG padding larger than one 8 KiB bank is filled by repeating the last
//!   8 KiB of real data, so mask-based address decoding keeps landing on the
//!   final bank. Smaller pads are zero.
//! - CHR padding is filled with `0xFF` (open bus on most boards).
//!
//! Anything short of a complete image is an error; partial images are never
//! returned.

use std::{
    io::{self, Read},
    path::Path,
};

use tracing::{debug, trace, warn};

use crate::{
    error::{Error, Section},
    header::{Header, NES_HEADER_LEN},
    image::{Image, TRAINER_SIZE},
    source::{Compression, open_source},
};

/// PRG padding is mirrored in units of this many bytes.
const PRG_MIRROR_STRIDE: usize = 8 * 1024;

/// Fill value for CHR padding.
const CHR_PAD_BYTE: u8 = 0xFF;

/// Loads an image from any byte source.
pub fn load<R: Read>(mut source: R) -> Result<Image, Error> {
    let mut raw = [0u8; NES_HEADER_LEN];
    read_section(&mut source, &mut raw, Section::Header)?;

    let header = Header::from_bytes(raw);
    if !header.is_valid() {
        return Err(Error::InvalidSignature);
    }
    if header.is_dirty() {
        warn!(
            "iNES 1.0 header has data in its reserved bytes: {:02X?}",
            &raw[8..]
        );
    }

    let prg_size = header.prg_rom_bytes();
    let chr_size = header.chr_rom_bytes();
    debug!(
        format = ?header.format(),
        mapper = header.mapper(),
        prg_size,
        chr_size,
        trainer = header.trainer_present(),
        "decoded iNES header"
    );
    if prg_size == 0 {
        warn!("header declares no PRG ROM");
    }

    let trainer = if header.trainer_present() {
        let mut trainer = Box::new([0u8; TRAINER_SIZE]);
        read_section(&mut source, trainer.as_mut_slice(), Section::Trainer)?;
        Some(trainer)
    } else {
        None
    };

    let prg_rom = if prg_size > 0 {
        let mut prg_rom = vec![0u8; allocation_size(prg_size)].into_boxed_slice();
        read_section(&mut source, &mut prg_rom[..prg_size], Section::Program)?;
        mirror_last_prg_bank(&mut prg_rom, prg_size);
        Some(prg_rom)
    } else {
        None
    };

    let chr_rom = if chr_size > 0 {
        let mut chr_rom = vec![0u8; allocation_size(chr_size)].into_boxed_slice();
        read_section(&mut source, &mut chr_rom[..chr_size], Section::Graphics)?;
        fill_chr_padding(&mut chr_rom, chr_size);
        Some(chr_rom)
    } else {
        None
    };

    Ok(Image::new(header, trainer, prg_rom, chr_rom))
}

/// Loads an image held in memory.
pub fn load_bytes(bytes: &[u8]) -> Result<Image, Error> {
    load(bytes)
}

/// Loads an image from disk, transparently decompressing gzip dumps.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Image, Error> {
    load_file_with(path, Compression::Auto)
}

/// Loads an image from disk using an explicit transport.
pub fn load_file_with<P: AsRef<Path>>(path: P, compression: Compression) -> Result<Image, Error> {
    let source = open_source(path, compression)?;
    load(source)
}

/// Buffer size used for a section of `size` bytes: the next power of two,
/// with 0 rounded up to 1.
pub fn allocation_size(size: usize) -> usize {
    size.max(1).next_power_of_two()
}

/// Fills `buf` completely or reports how far the source got.
fn read_section<R: Read>(source: &mut R, buf: &mut [u8], section: Section) -> Result<(), Error> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(Error::Truncated {
                    section,
                    expected: buf.len(),
                    actual: filled,
                });
            }
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            // Decoders report a stream that ends early this way.
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(Error::Truncated {
                    section,
                    expected: buf.len(),
                    actual: filled,
                });
            }
            Err(source) => return Err(Error::ReadFailed { section, source }),
        }
    }
    Ok(())
}

/// Repeats the last 8 KiB of PRG data through the padding when the pad is
/// larger than one bank.
pub(crate) fn mirror_last_prg_bank(buf: &mut [u8], logical: usize) {
    if logical < PRG_MIRROR_STRIDE || buf.len() - logical <= PRG_MIRROR_STRIDE {
        return;
    }

    let last_bank = logical - PRG_MIRROR_STRIDE;
    trace!(
        logical,
        allocated = buf.len(),
        "mirroring last PRG bank into padding"
    );
    let mut offset = logical;
    while offset < buf.len() {
        let len = PRG_MIRROR_STRIDE.min(buf.len() - offset);
        buf.copy_within(last_bank..last_bank + len, offset);
        offset += len;
    }
}

pub(crate) fn fill_chr_padding(buf: &mut [u8], logical: usize) {
    trace!(logical, allocated = buf.len(), "filling CHR padding");
    buf[logical..].fill(CHR_PAD_BYTE);
}
