//! Command-line configuration for the `iviewer` tool.
//!
//! The tool exposes each parameter transformation as a subcommand and prints
//! the result as JSON on stdout. Logs go to stderr.
//!
//! # Example
//!
//! ```text
//! iviewer resolutions --levels 4,2,1,0.5
//! iviewer channels '-1|111:343$808080,2|0:255$FF0000' --maps '[{"inverted":{"enabled":true}}]'
//! iviewer projection 'intmax|0:2'
//! iviewer color encode 'rgba(100,30,255,0.7)'
//! iviewer color decode -- -16776961
//! iviewer shape shape.json
//! iviewer query '?c=1|0:255$FF0000&m=c'
//! ```
//!
//! # Environment Variables
//!
//! - `IVIEWER_ZOOM_IN` - Zoom-in step for `resolutions` (default: 0.2)
//! - `IVIEWER_ZOOM_OUT` - Zoom-out step for `resolutions` (default: 1)
//! - `RUST_LOG` - Log filter, overrides `--verbose`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::resolution::{ZOOM_IN_RANGE, ZOOM_OUT_RANGE};

// =============================================================================
// CLI Arguments
// =============================================================================

/// iviewer - inspect microscopy viewer parameters.
///
/// Decodes compact viewer encodings (zoom ladders, channel and projection
/// parameters, packed colors, shape records) and prints them as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "iviewer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Print JSON on a single line.
    #[arg(long, global = true, default_value_t = false)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a zoom resolution ladder.
    Resolutions(ResolutionsConfig),

    /// Parse channel rendering parameters.
    Channels(ChannelsConfig),

    /// Parse a projection parameter.
    Projection(ProjectionConfig),

    /// Convert colors between rgba notation and packed integers.
    #[command(subcommand)]
    Color(ColorCommand),

    /// Normalize a shape record read from a JSON file or stdin.
    Shape(ShapeConfig),

    /// Decode viewer settings from an URL query string.
    Query(QueryConfig),
}

// =============================================================================
// Resolutions
// =============================================================================

/// Options for the `resolutions` subcommand.
///
/// With `--levels`, the levels are treated as pyramid resolutions and
/// densified. Otherwise a default ladder is generated from the zoom steps, or
/// from the pyramid fallback steps when no step is given either.
#[derive(Args, Debug, Clone, Default)]
pub struct ResolutionsConfig {
    /// Native pyramid resolutions (comma-separated), e.g. 4,2,1.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub levels: Option<Vec<f64>>,

    /// Zoom-in step for a generated ladder, in [0.01, 1).
    #[arg(long, env = "IVIEWER_ZOOM_IN")]
    pub zoom_in: Option<f64>,

    /// Zoom-out step for a generated ladder, in [0.1, 5).
    #[arg(long, env = "IVIEWER_ZOOM_OUT")]
    pub zoom_out: Option<f64>,
}

impl ResolutionsConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref levels) = self.levels {
            if levels.is_empty() {
                return Err("--levels needs at least one resolution".to_string());
            }
            if let Some(bad) = levels.iter().find(|r| !r.is_finite() || **r <= 0.0) {
                return Err(format!("Resolution {} must be a positive number", bad));
            }
        }

        check_step("zoom_in", self.zoom_in, ZOOM_IN_RANGE)?;
        check_step("zoom_out", self.zoom_out, ZOOM_OUT_RANGE)?;

        Ok(())
    }

    /// Whether zoom steps were given (via flags or environment).
    pub fn has_steps(&self) -> bool {
        self.zoom_in.is_some() || self.zoom_out.is_some()
    }
}

fn check_step(name: &str, step: Option<f64>, (min, max): (f64, f64)) -> Result<(), String> {
    match step {
        Some(s) if !(s.is_finite() && s >= min && s < max) => Err(format!(
            "{} must be at least {} and below {}, got {}",
            name, min, max, s
        )),
        _ => Ok(()),
    }
}

// =============================================================================
// Parameter Grammars
// =============================================================================

/// Options for the `channels` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ChannelsConfig {
    /// Channel parameters, e.g. '-1|111:343$808080,2|0:255$FF0000'.
    #[arg(allow_hyphen_values = true)]
    pub spec: String,

    /// JSON array with per-channel inversion flags.
    #[arg(long)]
    pub maps: Option<String>,
}

/// Options for the `projection` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ProjectionConfig {
    /// Projection parameter, e.g. 'intmax|0:2'.
    pub spec: String,
}

/// Options for the `query` subcommand.
#[derive(Args, Debug, Clone)]
pub struct QueryConfig {
    /// Query string, with or without the leading '?'.
    pub query: String,
}

// =============================================================================
// Color
// =============================================================================

/// Color conversions.
#[derive(Subcommand, Debug, Clone)]
pub enum ColorCommand {
    /// Encode rgba notation as a signed integer.
    Encode {
        /// Color such as 'rgba(255,0,0,0.5)' or 'rgb(255,0,0)'.
        rgba: String,
    },

    /// Decode a signed integer into rgba notation.
    Decode {
        /// Packed color, e.g. -16776961.
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
}

// =============================================================================
// Shape
// =============================================================================

/// Options for the `shape` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ShapeConfig {
    /// JSON file holding one shape record. Reads stdin when omitted.
    pub input: Option<PathBuf>,
}

impl ShapeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        match self.input {
            Some(ref path) if !path.is_file() => {
                Err(format!("Shape file '{}' does not exist", path.display()))
            }
            _ => Ok(()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
