//! iviewer - inspect microscopy viewer parameters from the command line.
//!
//! Each subcommand runs one transformation and prints JSON on stdout.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iviewer::{
    color::{rgba_to_signed_integer, signed_integer_to_rgba},
    config::{
        ChannelsConfig, Cli, ColorCommand, Command, ProjectionConfig, QueryConfig,
        ResolutionsConfig, ShapeConfig,
    },
    params::{parse_channel_parameters, parse_projection_parameter, ViewerQuery},
    resolution::{generate_default_resolutions, prepare_resolutions},
    shape::normalize_shape,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Resolutions(config) => run_resolutions(config),
        Command::Channels(config) => run_channels(config),
        Command::Projection(config) => run_projection(config),
        Command::Color(command) => run_color(command),
        Command::Shape(config) => run_shape(config),
        Command::Query(config) => run_query(config),
    };

    let value = match result {
        Ok(value) => value,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = if cli.compact {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing/logging subsystem.
///
/// Logs go to stderr so that stdout only carries the JSON result.
fn init_logging(verbose: bool) {
    let env_filter = if verbose { "iviewer=debug" } else { "iviewer=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| format!("Failed to serialize output: {}", e))
}

// =============================================================================
// Resolutions Command
// =============================================================================

fn run_resolutions(config: ResolutionsConfig) -> Result<Value, String> {
    config
        .validate()
        .map_err(|e| format!("Configuration error: {}", e))?;

    let ladder = match config.levels {
        Some(ref levels) => {
            if config.has_steps() {
                warn!("Zoom steps are ignored when --levels is given");
            }
            prepare_resolutions(Some(levels.as_slice()))
        }
        None if config.has_steps() => generate_default_resolutions(config.zoom_in, config.zoom_out),
        None => prepare_resolutions(None),
    };

    info!(
        "Ladder has {} levels ({} zoom out, {} zoom in)",
        ladder.len(),
        ladder.zoom_out_levels().len(),
        ladder.zoom_in_levels().len()
    );

    to_json(&ladder)
}

// =============================================================================
// Parameter Commands
// =============================================================================

fn run_channels(config: ChannelsConfig) -> Result<Value, String> {
    let channels = parse_channel_parameters(&config.spec, config.maps.as_deref());

    match channels {
        Some(ref c) => debug!("Parsed {} channel(s)", c.len()),
        None => warn!("Empty channel parameters"),
    }

    to_json(&channels)
}

fn run_projection(config: ProjectionConfig) -> Result<Value, String> {
    to_json(&parse_projection_parameter(&config.spec))
}

fn run_query(config: QueryConfig) -> Result<Value, String> {
    to_json(&ViewerQuery::parse(&config.query))
}

// =============================================================================
// Color Command
// =============================================================================

fn run_color(command: ColorCommand) -> Result<Value, String> {
    match command {
        ColorCommand::Encode { rgba } => rgba_to_signed_integer(&rgba)
            .map(Value::from)
            .ok_or_else(|| format!("Invalid color '{}': expected rgba(r,g,b,a) or rgb(r,g,b)", rgba)),
        ColorCommand::Decode { value } => Ok(Value::from(signed_integer_to_rgba(value))),
    }
}

// =============================================================================
// Shape Command
// =============================================================================

fn run_shape(config: ShapeConfig) -> Result<Value, String> {
    config
        .validate()
        .map_err(|e| format!("Configuration error: {}", e))?;

    let text = match config.input {
        Some(ref path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            text
        }
    };

    let raw: Value =
        serde_json::from_str(&text).map_err(|e| format!("Invalid shape JSON: {}", e))?;
    let shape = normalize_shape(raw).map_err(|e| format!("Invalid shape record: {}", e))?;

    debug!("Normalized {} shape", shape.kind);

    to_json(&shape)
}
