mod demo;
mod logging;

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use adaptive_card_builder::components::{AaaCard, aaa_card};
use adaptive_card_builder::{Attr, BuilderConfig, CardError, lint_card, prettify_json, render};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::demo::DemoKind;

#[derive(Parser)]
#[command(name = "card-builder")]
#[command(about = "Build and normalize Adaptive Card JSON", long_about = None)]
struct Cli {
    /// Spaces per indentation level (overrides ADAPTIVE_CARD_INDENT).
    #[arg(long, global = true)]
    indent: Option<usize>,
    /// Card schema version (overrides ADAPTIVE_CARD_SCHEMA_VERSION).
    #[arg(long, global = true, value_name = "VERSION")]
    schema_version: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a built-in sample card.
    Demo {
        #[arg(value_enum)]
        kind: DemoKind,
    },
    /// Build an App Analysis card from a JSON or YAML description.
    Aaa {
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Re-render an existing card: drops nulls inside objects and sorts keys.
    Render {
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Report unknown or untyped elements on stderr.
        #[arg(long)]
        lint: bool,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = resolve_config(cli.indent, cli.schema_version)?;
    debug!(version = %config.schema_version, indent = config.indent, "resolved builder config");

    let rendered = match cli.command {
        Command::Demo { kind } => demo::build(kind)?
            .with_version(config.schema_version.clone())
            .render()
            .map_err(CardError::from)?,
        Command::Aaa { input } => {
            let mut card: AaaCard = load_input(&input)?;
            if card.version.is_none() {
                card.version = Some(config.schema_version.clone());
            }
            aaa_card(&card)?.render().map_err(CardError::from)?
        }
        Command::Render { input, lint } => {
            let card: Value = load_input(&input)?;
            if lint {
                for warning in lint_card(&card) {
                    eprintln!(
                        "warning[{}] {}: {}",
                        warning.code,
                        warning.path.as_deref().unwrap_or("<card>"),
                        warning.message.as_deref().unwrap_or_default()
                    );
                }
            }
            render(&Attr::from(card)).map_err(CardError::from)?
        }
    };

    println!("{}", prettify_json(&rendered, config.indent)?);
    Ok(())
}

fn resolve_config(
    indent: Option<usize>,
    schema_version: Option<String>,
) -> Result<BuilderConfig, CliError> {
    let mut config = BuilderConfig::from_env();
    if let Some(indent) = indent {
        config.indent = indent;
    }
    if let Some(schema_version) = schema_version {
        config.schema_version = schema_version;
    }
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

/// Parse `path` as YAML when its extension says so, JSON otherwise.
fn load_input<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
        .map_err(|err| CliError::InputRead(path.to_path_buf(), err))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let parsed = if is_yaml {
        serde_yaml_bw::from_str(&contents).context("invalid YAML")
    } else {
        serde_json::from_str(&contents).context("invalid JSON")
    };
    parsed.map_err(|err| CliError::InputParse(path.to_path_buf(), err))
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("input load failed ({0}): {1:#}")]
    InputRead(PathBuf, #[source] anyhow::Error),
    #[error("input parse failed ({0}): {1:#}")]
    InputParse(PathBuf, #[source] anyhow::Error),
    #[error("invalid configuration: {0}")]
    Config(#[source] CardError),
    #[error("card build failed: {0}")]
    Build(#[from] CardError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::InputRead(_, _) => 1,
            CliError::InputParse(_, _) => 1,
            CliError::Config(_) => 2,
            CliError::Build(_) => 2,
        }
    }
}
