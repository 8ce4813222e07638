//! api-catalog CLI
//!
//! Import API vendor spreadsheets and write a translated JSON catalog.

mod error;
mod progress;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use api_catalog_import::{CatalogOptions, CatalogSummary, build_catalog};
use api_catalog_translate::{PassThrough, TranslateSettings, TranslationBackend, build_backend};

use crate::error::CliError;
use crate::progress::BarProgress;

#[derive(Parser)]
#[command(name = "api-catalog")]
#[command(about = "Import API catalog Excel files and translate to English", long_about = None)]
struct Cli {
    /// Directory containing .xlsx files
    #[arg(long, default_value = "api_classification")]
    directory: PathBuf,

    /// Output JSON path
    #[arg(long, default_value = "data/catalog/catalog-translated.json")]
    output: PathBuf,

    /// Target language code for translation
    #[arg(long, default_value = "en")]
    target_lang: String,

    /// Skip automatic translation and keep original text
    #[arg(long)]
    skip_translate: bool,

    /// Translation settings file (default: ~/.config/api-catalog/settings.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(summary) => {
            println!(
                "Exported {} records to {}",
                summary.records,
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".if_supports_color(Stderr, |t| t.red()));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Run the build command.
fn run(cli: &Cli) -> Result<CatalogSummary, CliError> {
    let backend = select_backend(cli)?;
    let options = CatalogOptions {
        directory: cli.directory.clone(),
        output: cli.output.clone(),
    };
    let progress = BarProgress::new(!cli.quiet && cli.verbose == 0);

    Ok(build_catalog(&options, backend.as_ref(), &progress)?)
}

/// One backend for the whole run; pass-through when translation is skipped
/// or unavailable.
fn select_backend(cli: &Cli) -> Result<Box<dyn TranslationBackend>, CliError> {
    if cli.skip_translate {
        return Ok(Box::new(PassThrough));
    }
    if let Some(path) = &cli.config {
        if !path.is_file() {
            return Err(CliError::config(format!(
                "settings file not found: {}",
                path.display()
            )));
        }
    }
    let settings = TranslateSettings::load(cli.config.as_deref());
    Ok(build_backend(&cli.target_lang, &settings))
}
