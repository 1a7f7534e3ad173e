mod args;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use nesium_ines::Compression;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::args::{Args, Command};

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let compression: Compression = args.compression.into();
    match args.command {
        Command::Info { rom } => {
            let image = nesium_ines::load_file_with(&rom, compression)
                .with_context(|| format!("loading {}", rom.display()))?;
            println!("{}", report::describe(&image));
        }
        Command::Hash { roms } => {
            for rom in roms {
                let image = nesium_ines::load_file_with(&rom, compression)
                    .with_context(|| format!("loading {}", rom.display()))?;
                println!("{}  {}", report::hash_line(&image), rom.display());
            }
        }
        Command::Normalize { input, output } => {
            let image = nesium_ines::load_file_with(&input, compression)
                .with_context(|| format!("loading {}", input.display()))?;
            nesium_ines::save(&image, &output)
                .with_context(|| format!("writing {}", output.display()))?;
            info!(
                prg_size = image.prg_size(),
                chr_size = image.chr_size(),
                "normalized {} -> {}",
                input.display(),
                output.display()
            );
        }
    }
    Ok(())
}
