// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lehua Index - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs one of the index
//! commands: the generated-entity demo, building an index file from an
//! entity list, querying an index file, or configuration housekeeping.

use clap::{Parser, Subcommand};
use lehua_index_lib::codec::JsonCodec;
use lehua_index_lib::config::{self, ConfigLoader, LehuaConfig, LogConfig};
use lehua_index_lib::entity::{generate_entities, print_entities, ScoredEntity};
use lehua_index_lib::error::{
    report_error, set_error_reporter, ErrorContext, LehuaError, LehuaResult,
    TracingErrorReporter,
};
use lehua_index_lib::EntityIndex;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Lehua Index.
#[derive(Parser, Debug)]
#[clap(name = "Lehua Index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Index generated sample entities and run the configured queries
    Demo,

    /// Build an index file from a JSON list of entities
    Build {
        /// Path to a JSON array of `{ "name", "score" }` records
        #[clap(short, long, value_parser)]
        input: PathBuf,

        /// Path to write the index to
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },

    /// Look up prefixes in an index file
    Query {
        /// Path to an index written by `build`
        #[clap(short, long, value_parser)]
        index: PathBuf,

        /// Prefixes to look up
        #[clap(required = true)]
        prefixes: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LehuaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LehuaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = loader.load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = args.command.unwrap_or(Command::Demo);
    let result = match loaded {
        Ok(config) => run(command, &config),
        Err(e) => Err(e.into()),
    };

    if let Err(error) = result {
        let details = args
            .config
            .map(|path| format!("config file: {}", path.display()))
            .unwrap_or_else(|| "no config file".to_string());
        report_error(ErrorContext::new(error, "cli").with_details(details));
        process::exit(1);
    }
}

fn run(command: Command, config: &LehuaConfig) -> LehuaResult<()> {
    match command {
        Command::Demo => run_demo(config),
        Command::Build { input, output } => {
            info!(input = %input.display(), "Building index");
            let json = std::fs::read_to_string(&input)?;
            let entities = JsonCodec::<Vec<ScoredEntity>>::new().decode(&json)?;

            let index = EntityIndex::build(entities, &config.index)?;
            write_file(&output, index.to_json()?)?;

            info!(output = %output.display(), "Index written");
            Ok(())
        }
        Command::Query { index, prefixes } => {
            let index = EntityIndex::from_json(&std::fs::read_to_string(&index)?)?;
            for prefix in &prefixes {
                println!("{prefix}:");
                for entity in index.query(prefix) {
                    println!("  name={}, score={}", entity.name, entity.score);
                }
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let toml = toml::to_string_pretty(&LehuaConfig::default())
                .map_err(|e| LehuaError::Custom(format!("Failed to serialize config: {e}")))?;
            write_file(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

fn run_demo(config: &LehuaConfig) -> LehuaResult<()> {
    let entities = generate_entities(config.demo.entity_count);
    info!("Original list");
    print_entities(&entities);

    let index = EntityIndex::build(entities, &config.index)?;
    info!("Sorted list");
    print_entities(index.entities());

    let restored = EntityIndex::from_json(&index.to_json()?)?;

    for query in &config.demo.queries {
        let hits = index.query(query);
        if restored.query(query) != hits {
            return Err(LehuaError::Custom(format!(
                "Decoded index disagrees with the original on query '{query}'"
            )));
        }

        let names: Vec<&str> = hits.iter().map(|e| e.name.as_str()).collect();
        info!(query = %query, results = ?names, "Query results");
    }

    Ok(())
}

fn write_file(path: &Path, contents: String) -> LehuaResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}
