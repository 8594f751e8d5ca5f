//! voussoir CLI - barrel-vault block generator
//!
//! Generates the voussoirs of a barrel vault, inspects generated vault
//! documents and exports them as STL.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use voussoir_vault::{tessellate, write_stl, VaultDocument};

mod config;

use config::{load_parameters, ParamArgs};

#[derive(Parser)]
#[command(name = "voussoir")]
#[command(about = "Barrel-vault voussoir generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tessellate a barrel vault into a JSON vault document
    Generate {
        /// TOML file with vault parameters
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        params: ParamArgs,
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
        /// Also write the blocks as binary STL
        #[arg(long)]
        stl: Option<PathBuf>,
    },
    /// Display information about a vault document
    Info {
        /// Path to the JSON vault document
        file: PathBuf,
    },
    /// Export a vault document to binary STL
    ExportStl {
        /// Input JSON vault document
        input: PathBuf,
        /// Output STL file
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            params,
            output,
            stl,
        } => {
            generate(config.as_deref(), &params, &output, stl.as_deref())?;
        }
        Commands::Info { file } => {
            show_info(&file)?;
        }
        Commands::ExportStl { input, output } => {
            export_stl(&input, &output)?;
        }
    }

    Ok(())
}

fn generate(
    config: Option<&Path>,
    overrides: &ParamArgs,
    output: &Path,
    stl: Option<&Path>,
) -> Result<()> {
    let params = load_parameters(config, overrides)?;
    info!(?params, "generating vault");

    let vault = tessellate(&params)?;
    VaultDocument::from_vault(&vault)
        .write(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Wrote {} voussoirs to {}", vault.len(), output.display());

    if let Some(path) = stl {
        write_stl(&vault.voussoirs, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Exported STL to {}", path.display());
    }

    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let vault = VaultDocument::read(file)
        .and_then(VaultDocument::into_vault)
        .with_context(|| format!("failed to load {}", file.display()))?;

    println!("vault document: {}", file.display());
    println!("  Voussoirs: {}", vault.len());
    println!("  Supports: {}", vault.supports().count());
    println!("  Total volume: {:.3}", vault.total_volume());

    if let Some(bounds) = vault.bounds() {
        let size = bounds.size();
        println!(
            "  Bounds: min=({:.3}, {:.3}, {:.3}) max=({:.3}, {:.3}, {:.3})",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        );
        println!("  Size: {:.3} x {:.3} x {:.3}", size.x, size.y, size.z);
    }

    let inverted = vault.voussoirs.iter().filter(|v| v.volume() <= 0.0).count();
    if inverted > 0 {
        println!("  Warning: {} blocks are flat or inside out", inverted);
    }

    Ok(())
}

fn export_stl(input: &Path, output: &Path) -> Result<()> {
    let vault = VaultDocument::read(input)
        .and_then(VaultDocument::into_vault)
        .with_context(|| format!("failed to load {}", input.display()))?;
    write_stl(&vault.voussoirs, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Exported STL to {}", output.display());
    Ok(())
}
