//! Opening ROM files as byte sources.
//!
//! Dumps are commonly distributed gzip-compressed. The loader only needs a
//! [`Read`], so compression is handled here by wrapping the file before any
//! header byte is looked at.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use tracing::debug;

use crate::error::{Error, Section};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Transport wrapped around the iNES bytes on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compression {
    /// Sniff the gzip magic and fall back to plain bytes.
    #[default]
    Auto,
    /// The file is gzip-compressed.
    Gzip,
    /// The file is a plain `.nes` image.
    None,
}

/// Opens `path` and returns a reader yielding the uncompressed image bytes.
pub fn open_source<P: AsRef<Path>>(
    path: P,
    compression: Compression,
) -> Result<Box<dyn Read>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let compression = match compression {
        Compression::Auto => sniff(&mut reader)?,
        explicit => explicit,
    };
    debug!(path = %path.display(), ?compression, "opened cartridge source");

    wrap(reader, compression)
}

fn sniff<R: BufRead>(reader: &mut R) -> Result<Compression, Error> {
    let head = reader.fill_buf().map_err(|source| Error::ReadFailed {
        section: Section::Header,
        source,
    })?;
    if head.starts_with(&GZIP_MAGIC) {
        Ok(Compression::Gzip)
    } else {
        Ok(Compression::None)
    }
}

#[cfg(feature = "gzip")]
fn wrap<R: BufRead + 'static>(reader: R, compression: Compression) -> Result<Box<dyn Read>, Error> {
    match compression {
        Compression::Gzip => Ok(Box::new(flate2::bufread::MultiGzDecoder::new(reader))),
        _ => Ok(Box::new(reader)),
    }
}

#[cfg(not(feature = "gzip"))]
fn wrap<R: BufRead + 'static>(reader: R, compression: Compression) -> Result<Box<dyn Read>, Error> {
    match compression {
        Compression::Gzip => Err(Error::UnsupportedCompression(compression)),
        _ => Ok(Box::new(reader)),
    }
}
