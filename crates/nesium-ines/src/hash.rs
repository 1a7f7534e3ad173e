//! CRC32 fingerprints for cartridge sections.
//!
//! This is the standard reflected CRC-32 (polynomial `0xEDB88320`) with one
//! twist inherited from ROM database tooling: the seed is a previous CRC
//! result, so hashing several buffers in sequence yields one fingerprint for
//! the whole image without concatenating them first.

use crc32fast::Hasher;

/// Computes the CRC32 of `data`, continuing from `seed`.
///
/// `seed == 0` gives the canonical single-buffer CRC32. Feeding the result of
/// a previous call back in as `seed` chains buffers together. An empty slice
/// returns `seed` unchanged.
pub fn crc32(data: &[u8], seed: u32) -> u32 {
    let mut hasher = Hasher::new_with_initial(seed);
    hasher.update(data);
    hasher.finalize()
}

/// Chains [`crc32`] over `parts` in order, skipping absent sections.
pub fn crc32_chain<'a, I>(parts: I) -> u32
where
    I: IntoIterator<Item = Option<&'a [u8]>>,
{
    parts
        .into_iter()
        .fold(0, |acc, part| part.map_or(acc, |data| crc32(data, acc)))
}
