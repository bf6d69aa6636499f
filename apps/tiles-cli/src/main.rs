//! Tiles Binary
//!
//! Entry point for rendering word tiles and harvesting words from PDFs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tiles_cli::{log_filter, Config, FormatArg, GenerateOptions, LayoutPreset, StrategyArg};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tiles")]
#[command(
    version,
    about = "Render reduplicated words as letter tiles and harvest them from PDFs"
)]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render words as tiles into a PDF
    Generate {
        /// Layout preset (defaults to the configured one)
        #[arg(short, long, value_enum)]
        layout: Option<LayoutPreset>,

        /// Word file: `WORD` or `WORD,definition` per line
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Header title
        #[arg(long)]
        title: Option<String>,

        #[arg(short, long, default_value = "Reduplicated_Words.pdf")]
        output: PathBuf,
    },

    /// List the reduplicated seven-letter words found in a PDF
    Harvest {
        #[arg(default_value = "sevens.pdf")]
        pdf: PathBuf,

        #[arg(short, long, default_value = "reduplicated_words.txt")]
        output: PathBuf,
    },

    /// Extract definitions for the sample words from a PDF
    Define {
        #[arg(default_value = "sevens.pdf")]
        pdf: PathBuf,

        #[arg(short, long, value_enum, default_value = "line")]
        strategy: StrategyArg,

        #[arg(short, long, value_enum, default_value = "quoted")]
        format: FormatArg,

        #[arg(short, long, default_value = "definitions.txt")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout is reserved for the result line
    tracing_subscriber::registry()
        .with(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting tiles v{}", env!("CARGO_PKG_VERSION"));
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Generate {
            layout,
            words,
            title,
            output,
        } => {
            let options = GenerateOptions {
                layout,
                words,
                title,
                output,
            };
            let path = tiles_cli::generate(&options, &config)?;
            println!("✅ PDF saved as {}", path.display());
        }
        Command::Harvest { pdf, output } => {
            let path = tiles_cli::harvest(&pdf, &output, &config)?;
            println!("✅ Words have been written to {}", path.display());
        }
        Command::Define {
            pdf,
            strategy,
            format,
            output,
        } => {
            let path =
                tiles_cli::define(&pdf, &output, strategy.into(), format.into(), &config)?;
            println!("✅ Definitions have been written to {}", path.display());
        }
    }

    Ok(())
}
