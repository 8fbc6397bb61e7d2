// SPDX-License-Identifier: MIT OR Apache-2.0

//! mcp-translations: resolve overridable strings and export them.
//!
//! Resolves each `KEY=DEFAULT` pair the same way the server does at startup and
//! prints the effective values. With `--export` the resolutions are written to
//! the config file, ready to be edited.

use clap::Parser;
use mcp_translations::service::TranslationHelper;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Resolve overridable strings from the environment and the JSON config file
#[derive(Parser, Debug)]
#[command(name = "mcp-translations")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding github-mcp-server-config.json
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Prefix of the environment variables that override keys
    #[arg(long, default_value = mcp_translations::adapters::ENV_PREFIX)]
    env_prefix: String,

    /// Write every resolved key to the config file
    #[arg(long)]
    export: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Keys to resolve, as KEY=DEFAULT
    #[arg(value_name = "KEY=DEFAULT", value_parser = parse_pair)]
    pairs: Vec<(String, String)>,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected KEY=DEFAULT, got '{}'", s))
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let mut helper = TranslationHelper::builder()
        .config_dir(&cli.config_dir)
        .env_prefix(&cli.env_prefix)
        .build();

    for (key, default) in &cli.pairs {
        let value = helper.resolve(key, default);
        println!("{}={}", key, value);
    }

    if cli.export {
        if let Err(e) = helper.finalize() {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
        tracing::info!("Exported translations to {}", helper.output_path().display());
    }
}
