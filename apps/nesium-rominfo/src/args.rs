use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use nesium_ines::Compression;
use tracing::Level;

/// Inspect, fingerprint and normalize iNES cartridge images
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    pub log_level: Level,

    /// How the input files are stored on disk
    #[arg(short, long, value_enum, default_value_t = Transport::Auto, global = true)]
    pub compression: Transport,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the decoded header and section fingerprints
    Info {
        /// Path to the NES ROM file (plain or gzip)
        rom: PathBuf,
    },
    /// Print PRG, CHR and whole-image CRC32 for each file
    Hash {
        #[arg(required = true)]
        roms: Vec<PathBuf>,
    },
    /// Rewrite a ROM as a canonical, uncompressed iNES file
    Normalize {
        input: PathBuf,
        output: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Auto,
    Gzip,
    None,
}

impl From<Transport> for Compression {
    fn from(value: Transport) -> Self {
        match value {
            Transport::Auto => Compression::Auto,
            Transport::Gzip => Compression::Gzip,
            Transport::None => Compression::None,
        }
    }
}
