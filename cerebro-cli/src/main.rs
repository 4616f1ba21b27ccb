//! Command-line interface for building Cerebro datasets
//! Reads the intent files a manifest selects from a data folder and writes the JSON data model.
//!
//! Usage:
//!   cerebro-build --data `<folder>` --manifest `<file>` [--output `<file>`] [--config `<file>`] [--pretty] [--strict]
//!
//! Configuration precedence: built-in defaults, then `<folder>/cerebro.toml` if present, then
//! `--config`, then flags. Log output goes to stderr, filtered by `RUST_LOG` or `logging.filter`.

use anyhow::{Context, Result};
use cerebro_config::{CerebroConfig, Loader};
use cerebro_parser::cerebro::{DataModel, IntentLoader, LoaderOptions};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DATA_FOLDER_CONFIG: &str = "cerebro.toml";

fn cli() -> Command {
    Command::new("cerebro-build")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build the Cerebro NLU data model from human readable intent files")
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("DATA_FOLDER")
                .help("The data folder containing intent files named <INTENT_NAME>.yaml")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .value_name("MANIFEST_FILE")
                .help("The manifest listing the intents to take from the data folder")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("OUTPUT_FILE")
                .help("The JSON file to write the model to (stdout when omitted)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("CONFIG_FILE")
                .help("Configuration file layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the JSON output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail when the manifest names an intent without a file")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let data = matches
        .get_one::<PathBuf>("data")
        .expect("data is required");
    let manifest = matches
        .get_one::<PathBuf>("manifest")
        .expect("manifest is required");

    let config = load_config(matches, data)?;
    init_logging(&config.logging.filter)?;

    let options = LoaderOptions {
        extension: config.input.extension.clone(),
        strict_manifest: config.input.strict_manifest,
    };
    let model = IntentLoader::from_paths(data, manifest)?
        .with_options(options)
        .build()
        .context("failed to build data model")?;

    match matches.get_one::<PathBuf>("output") {
        Some(path) => write_model_file(&model, path, config.output.pretty),
        None => write_model_stdout(&model, config.output.pretty),
    }
}

fn load_config(matches: &ArgMatches, data: &Path) -> Result<CerebroConfig> {
    let mut loader = Loader::new().with_optional_file(data.join(DATA_FOLDER_CONFIG));
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("pretty") {
        loader = loader.set_override("output.pretty", true)?;
    }
    if matches.get_flag("strict") {
        loader = loader.set_override("input.strict_manifest", true)?;
    }
    loader.build().context("failed to load configuration")
}

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid logging filter {default_filter:?}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn write_model_file(model: &DataModel, path: &Path, pretty: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    model.write_to(&mut writer, pretty)?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = model.len(), "wrote data model");
    Ok(())
}

fn write_model_stdout(model: &DataModel, pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    model.write_to(&mut handle, pretty)?;
    writeln!(handle)?;
    Ok(())
}
