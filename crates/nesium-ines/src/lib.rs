//! iNES / NES 2.0 cartridge images: header decoding, loading with normalized
//! section layout, canonical writing and CRC32 fingerprints.
//!
//! ```no_run
//! let image = nesium_ines::load_file("smb.nes.gz")?;
//! println!("mapper {} prg {:08x}", image.header().mapper(), image.prg_hash());
//! # Ok::<(), nesium_ines::Error>(())
//! ```

pub mod error;
pub mod hash;
pub mod header;
pub mod image;
pub mod loader;
pub mod source;
pub mod writer;

pub use error::{Error, Section};
pub use hash::crc32;
pub use header::{
    CHR_BANK_SIZE, ConsoleType, Extension, Header, Mirroring, NES_HEADER_LEN, NES_MAGIC,
    PRG_BANK_SIZE, PpuVariant, RomFormat, TvSystem,
};
pub use image::{Image, TRAINER_SIZE};
pub use loader::{load, load_bytes, load_file, load_file_with};
pub use source::Compression;
pub use writer::{save, write};
