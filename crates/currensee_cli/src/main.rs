//! CurrenSee theme CLI
//!
//! Renders the theme's CSS custom properties, converts colors to the HSL
//! triplets used by the compatibility slots, checks theme integrity, and
//! manages the persisted light/dark preference.

mod check;
mod config;
mod project;
mod stylesheet;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use currensee_theme::{to_hsl, ThemeBundle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::CurrenseeConfig;
use crate::stylesheet::SchemeSelection;

/// CurrenSee theme tooling
#[derive(Parser, Debug)]
#[command(name = "currensee")]
#[command(about = "Render and manage the CurrenSee light/dark theme")]
#[command(version)]
struct Cli {
    /// Path to currensee.toml or the directory holding it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the theme as CSS custom properties
    Css {
        /// Scheme(s) to render
        #[arg(short, long, value_enum, default_value = "both")]
        scheme: SchemeSelection,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert colors to `H S% L%` triplets
    Hsl {
        /// `#RRGGBB` or `rgb()`/`rgba()` values
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// Check both themes and the configured overrides
    Check,

    /// Flip the persisted preference between light and dark
    Toggle,

    /// Create a starter currensee.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
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
        Command::Css { scheme, output } => {
            let (config, base) = load_config(cli.config.as_deref())?;
            let css = stylesheet::render(&config, &base, scheme)?;
            match output {
                Some(path) => {
                    fs::write(&path, css)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => print!("{css}"),
            }
        }
        Command::Hsl { colors } => {
            for color in colors {
                println!("{color}: {}", to_hsl(&color));
            }
        }
        Command::Check => {
            let (config, _) = load_config(cli.config.as_deref())?;
            let projector = config.projector()?;
            let findings = check::check_bundle(&ThemeBundle::currensee(), &projector);
            if !findings.is_empty() {
                for finding in &findings {
                    eprintln!("{}: {}", finding.scheme, finding.message);
                }
                anyhow::bail!("{} problem(s) found", findings.len());
            }
            tracing::info!("Theme OK");
        }
        Command::Toggle => {
            let (config, base) = load_config(cli.config.as_deref())?;
            let path = config
                .preference_path(&base)
                .context("No preference_file configured in [theme]; nothing to persist to")?;
            let store = stylesheet::open_store(&config, &base)?;
            let next = store.toggle()?;
            tracing::info!("Saved preference to {}", path.display());
            println!("{next}");
        }
        Command::Init { path, force } => {
            project::init_project(&path, force)?;
        }
    }

    Ok(())
}

/// Load the config and the directory relative paths resolve against
fn load_config(path: Option<&Path>) -> Result<(CurrenseeConfig, PathBuf)> {
    match path {
        Some(path) => {
            let config = CurrenseeConfig::load(path)?;
            let base = if path.is_dir() {
                path.to_path_buf()
            } else {
                path.parent().map(Path::to_path_buf).unwrap_or_default()
            };
            Ok((config, base))
        }
        None => {
            let cwd = std::env::current_dir()?;
            Ok((CurrenseeConfig::load_or_default(&cwd)?, cwd))
        }
    }
}
