//! Projection parameter.
//!
//! The projection arrives as `normal`, or as a mode with a plane range such as
//! `intmax|0:2` (maximum intensity projection over planes 0 to 2).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::channel::parse_window;
use crate::error::UnknownProjection;

/// Separates the mode from the plane range.
const RANGE_SEPARATOR: char = '|';

/// How z-planes are combined for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// A single plane
    #[default]
    Normal,
    /// Maximum intensity projection
    IntMax,
    /// Planes shown side by side
    Split,
}

impl Projection {
    /// Wire name of the projection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::Normal => "normal",
            Projection::IntMax => "intmax",
            Projection::Split => "split",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Projection {
    type Err = UnknownProjection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Projection::Normal),
            "intmax" => Ok(Projection::IntMax),
            "split" => Ok(Projection::Split),
            other => Err(UnknownProjection(other.to_string())),
        }
    }
}

/// A parsed projection parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProjectionSpec {
    pub projection: Projection,

    /// First plane of the projection range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,

    /// Last plane of the projection range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

/// Parse a projection parameter such as `intmax|0:2`.
///
/// An unknown mode falls back to [`Projection::Normal`]; a range that is not
/// two integers is left out. Never fails.
///
/// # Example
///
/// ```
/// use iviewer::params::{parse_projection_parameter, Projection};
///
/// let spec = parse_projection_parameter("intmax|0:2");
/// assert_eq!(spec.projection, Projection::IntMax);
/// assert_eq!((spec.start, spec.end), (Some(0), Some(2)));
///
/// assert_eq!(parse_projection_parameter("bogus").projection, Projection::Normal);
/// ```
pub fn parse_projection_parameter(projection_info: &str) -> ProjectionSpec {
    let mut spec = ProjectionSpec::default();
    if projection_info.is_empty() {
        return spec;
    }

    let mode = match projection_info.split_once(RANGE_SEPARATOR) {
        Some((mode, range)) => {
            if let Some((start, end)) = parse_window(range) {
                spec.start = Some(start);
                spec.end = Some(end);
            }
            mode
        }
        None => projection_info,
    };

    spec.projection = mode.parse().unwrap_or_else(|e: UnknownProjection| {
        debug!("Falling back to normal projection: {}", e);
        Projection::Normal
    });

    spec
}
