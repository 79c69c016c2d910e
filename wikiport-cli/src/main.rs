//! # wikiport CLI
//!
//! Command-line interface for the wikiport vault-to-site markdown converter.

use clap::Parser;
use std::path::PathBuf;
use wikiport_core::{config, Config, Converter};

/// Rewrite a wiki-style markdown vault into static-site-ready markdown,
/// in place.
#[derive(Parser)]
#[command(name = "wikiport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source vault directory
    #[arg(long, env = "INPUT_SRC_ROOT_DIRECTORY")]
    root: PathBuf,

    /// URL prefix substituted for the root directory in resolved links
    #[arg(long, env = "INPUT_URL_BASE", default_value = "")]
    url_base: String,

    /// Name of the generated-output subdirectory to skip during enumeration
    #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
    output_dir_name: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Source root: {:?}", cli.root);
    tracing::info!("URL base: {:?}", cli.url_base);

    let mut config = Config::new(cli.root, cli.url_base);
    config.output_dir_name = cli.output_dir_name;

    Converter::new(config).run()?;

    Ok(())
}
