use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::source::Compression;

/// Region of an iNES image, used to report where a read stopped short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The fixed 16-byte header.
    Header,
    /// The optional 512-byte trainer block.
    Trainer,
    /// PRG ROM (program code).
    Program,
    /// CHR ROM (graphics data).
    Graphics,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "header",
            Self::Trainer => "trainer",
            Self::Program => "PRG ROM",
            Self::Graphics => "CHR ROM",
        };
        f.write_str(name)
    }
}

/// Failure while opening, loading or writing a cartridge image.
#[derive(Debug, Error)]
pub enum Error {
    /// The file backing a byte source or sink could not be opened/created.
    #[error("failed to open {}: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Magic number ("NES<EOF>") is missing.
    #[error("missing NES magic bytes")]
    InvalidSignature,

    /// The source ran dry before a section declared by the header was complete.
    #[error("{section} section expected {expected} bytes, got {actual}")]
    Truncated {
        section: Section,
        expected: usize,
        actual: usize,
    },

    /// The source reported an I/O failure other than end of stream.
    #[error("i/o error while reading {section}: {source}")]
    ReadFailed {
        section: Section,
        #[source]
        source: io::Error,
    },

    /// A write to the sink did not complete.
    #[error("failed to write cartridge image: {0}")]
    WriteFailed(#[source] io::Error),

    /// The requested transport is not compiled into this build.
    #[error("unsupported compression: {0:?}")]
    UnsupportedCompression(Compression),
}
