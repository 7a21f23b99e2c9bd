use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use log::info;

use id_colorgen::generate_colormap;
use id_lump_format::{Palette, COLORMAP_BYTES, LIGHT_LEVELS, PALETTE_BYTES};

/// Always written to the current directory.
const COLORMAP_FILENAME: &str = "colormap.lmp";

/// Generates a 64 level lighting colormap from a 256 color palette.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Generates 'colormap.lmp' in the current directory.")]
struct Cli {
    /// Input palette lump: 256 RGB triples, 768 bytes.
    palette: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // clap exits with 2 on usage errors by default, we want 1 for every failure.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let palette = Palette::read_lump(&cli.palette)
        .with_context(|| format!("Failed to load palette {}", cli.palette.display()))?;
    info!("Read {} ({} bytes).", cli.palette.display(), PALETTE_BYTES);

    info!("Generating colormap...");
    let start = Instant::now();
    let colormap = generate_colormap(&palette);
    info!(
        "Generated {} light levels in {:?}.",
        LIGHT_LEVELS,
        start.elapsed()
    );

    // Only touch the output once everything above has succeeded.
    colormap
        .write_lump(COLORMAP_FILENAME)
        .context("Failed to save colormap")?;
    info!("Wrote {} ({} bytes).", COLORMAP_FILENAME, COLORMAP_BYTES);

    Ok(())
}
