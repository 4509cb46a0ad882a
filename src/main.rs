//! # Gem Placeholders CLI
//!
//! Generates the website's placeholder images.
//!
//! ## Usage
//!
//! ```bash
//! # Generate everything under the current directory
//! gem-placeholders
//!
//! # Generate into another directory with a different seed
//! gem-placeholders generate --output site --seed 7
//!
//! # Show the catalog
//! gem-placeholders list
//! gem-placeholders list --json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gem_placeholders::{catalog, Config, PlaceholderError};

/// Gem Placeholders - procedural website imagery
#[derive(Parser, Debug)]
#[command(name = "gem-placeholders")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every catalog image
    Generate {
        /// Output root; images land in <OUTPUT>/images
        #[arg(long, short, default_value = ".")]
        output: PathBuf,

        /// Seed for facet jitter, stone texture and sparkles
        #[arg(long, default_value_t = gem_placeholders::config::DEFAULT_SEED)]
        seed: u64,

        /// TrueType font for labels (falls back to a built-in font)
        #[arg(long, value_name = "FILE")]
        font: Option<PathBuf>,
    },

    /// List catalog entries without rendering
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlaceholderError> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            catalog::generate_catalog(&Config::default())?;
        }
        Some(Commands::Generate { output, seed, font }) => {
            let defaults = Config::default();
            let config = Config {
                output_root: output,
                seed,
                font_path: font.unwrap_or(defaults.font_path),
                ..defaults
            };
            catalog::generate_catalog(&config)?;
        }
        Some(Commands::List { json }) => {
            let sections = catalog::catalog();
            if json {
                println!("{}", serde_json::to_string_pretty(&sections)?);
            } else {
                for section in &sections {
                    println!("[{}]", section.title);
                    for entry in &section.entries {
                        println!("  {:<12} {:<45} {}", entry.kind(), entry.path(), entry.label());
                    }
                }
            }
        }
    }

    Ok(())
}
