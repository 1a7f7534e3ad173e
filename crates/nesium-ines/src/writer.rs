//! Serializes images back to the canonical iNES layout.
//!
//! Only logical section sizes are written; padding added by the loader never
//! reaches the output, so a dump survives load → write byte for byte.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{error::Error, image::Image};

/// Writes `image` to `sink` as header, trainer, PRG ROM, CHR ROM.
pub fn write<W: Write>(image: &Image, mut sink: W) -> Result<(), Error> {
    sink.write_all(image.header().as_bytes())
        .map_err(Error::WriteFailed)?;
    if let Some(trainer) = image.trainer() {
        sink.write_all(trainer).map_err(Error::WriteFailed)?;
    }
    sink.write_all(image.prg_rom()).map_err(Error::WriteFailed)?;
    sink.write_all(image.chr_rom()).map_err(Error::WriteFailed)?;
    sink.flush().map_err(Error::WriteFailed)?;

    debug!(
        prg_size = image.prg_size(),
        chr_size = image.chr_size(),
        trainer = image.trainer().is_some(),
        "wrote iNES image"
    );
    Ok(())
}

/// Creates (or truncates) `path` and writes `image` into it.
pub fn save<P: AsRef<Path>>(image: &Image, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    write(image, BufWriter::new(file))
}

impl Image {
    /// See [`write`].
    pub fn write_to<W: Write>(&self, sink: W) -> Result<(), Error> {
        write(self, sink)
    }

    /// Canonical on-disk bytes of this image.
    pub fn to_bytes(&self) -> Vec<u8> {
        let trainer_len = self.trainer().map_or(0, |trainer| trainer.len());
        let mut out = Vec::with_capacity(
            self.header().as_bytes().len() + trainer_len + self.prg_size() + self.chr_size(),
        );
        out.extend_from_slice(self.header().as_bytes());
        if let Some(trainer) = self.trainer() {
            out.extend_from_slice(trainer);
        }
        out.extend_from_slice(self.prg_rom());
        out.extend_from_slice(self.chr_rom());
        out
    }
}
