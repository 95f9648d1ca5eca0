//! Cardkit CLI - style inspector
//!
//! Resolves a card configuration against a theme and prints the result:
//!
//! ```text
//! cardkit resolve --card card.toml --theme brand.toml --hovered --format css
//! cardkit theme --theme brand.json
//! ```

mod inspect;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::inspect::{InteractionFlags, MediaFlags};

#[derive(Parser, Debug)]
#[command(name = "cardkit")]
#[command(about = "Inspect resolved cardkit styles and themes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a card configuration to its style and attributes
    Resolve {
        /// Card configuration (TOML)
        #[arg(short, long)]
        card: PathBuf,

        /// Theme overrides (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        theme: Option<PathBuf>,

        #[arg(long)]
        hovered: bool,

        #[arg(long)]
        pressed: bool,

        #[arg(long)]
        focused: bool,

        /// Viewport width in pixels
        #[arg(long)]
        viewport: Option<f32>,

        #[arg(long)]
        high_contrast: bool,

        #[arg(long)]
        reduced_motion: bool,

        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,
    },

    /// Print the theme (default, or with overrides merged) as JSON
    Theme {
        /// Theme overrides (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        theme: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Css,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Command::Resolve {
            card,
            theme,
            hovered,
            pressed,
            focused,
            viewport,
            high_contrast,
            reduced_motion,
            format,
        } => {
            let interaction = InteractionFlags {
                hovered,
                pressed,
                focused,
            };
            let media = MediaFlags {
                viewport,
                high_contrast,
                reduced_motion,
            };
            inspect::resolve(&card, theme.as_deref(), interaction, media, format)?
        }
        Command::Theme { theme } => inspect::theme(theme.as_deref())?,
    };

    println!("{output}");
    Ok(())
}
