//! Zoom resolution ladders.
//!
//! A viewer zooms through a fixed, ordered list of scale factors. A value of
//! `1.0` shows the image at its native resolution, values above `1.0` are
//! zoomed out and values between `0` and `1.0` are zoomed in.
//!
//! # Sources of a ladder
//!
//! - [`generate_default_resolutions`]: a geometric default for images without
//!   pyramid metadata, built from a zoom-in and a zoom-out step.
//! - [`prepare_resolutions`]: densifies the sparse resolution list a tiled
//!   pyramid source exposes, keeping the native levels as anchor points.
//!
//! ```text
//!   zoom out            pivot          zoom in
//!  [4.0, 3.0, 2.0,       1.0,      0.8, 0.6, 0.4, 0.2]
//! ```

mod ladder;
mod pyramid;

use serde::Serialize;

pub use ladder::{
    generate_default_resolutions, DEFAULT_ZOOM_IN, DEFAULT_ZOOM_OUT, MAX_ZOOM_OUT_RESOLUTION,
    MIN_ZOOM_IN_RESOLUTION, ZOOM_IN_RANGE, ZOOM_OUT_RANGE,
};
pub use pyramid::{
    prepare_resolutions, PYRAMID_ZOOM_IN, PYRAMID_ZOOM_OUT, SUBDIVISIONS_PER_LEVEL,
};

/// Resolution of a level shown at native size.
pub const NATIVE_RESOLUTION: f64 = 1.0;

// =============================================================================
// ResolutionLadder
// =============================================================================

/// An ordered list of zoom scale factors, sorted in descending order.
///
/// Every ladder contains exactly one [`NATIVE_RESOLUTION`] entry (the pivot).
/// Entries before the pivot are zoomed out (`> 1`), entries after it are
/// zoomed in (`< 1` and `> 0`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolutionLadder(Vec<f64>);

impl ResolutionLadder {
    /// Build a ladder from generated levels.
    ///
    /// Non-finite and non-positive levels are dropped, the rest sorted
    /// coarsest first with duplicates collapsed, so the ladder is always
    /// strictly descending.
    pub(crate) fn from_levels(mut levels: Vec<f64>) -> Self {
        levels.retain(|r| r.is_finite() && *r > 0.0);
        levels.sort_by(|a, b| b.total_cmp(a));
        levels.dedup();
        Self(levels)
    }

    /// All levels, coarsest first.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ladder has no levels.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the native resolution entry.
    pub fn pivot_index(&self) -> Option<usize> {
        self.0.iter().position(|&r| r == NATIVE_RESOLUTION)
    }

    /// Levels coarser than native resolution.
    pub fn zoom_out_levels(&self) -> &[f64] {
        let end = self.0.partition_point(|&r| r > NATIVE_RESOLUTION);
        &self.0[..end]
    }

    /// Levels finer than native resolution.
    pub fn zoom_in_levels(&self) -> &[f64] {
        let start = self.0.partition_point(|&r| r >= NATIVE_RESOLUTION);
        &self.0[start..]
    }

    /// Consume the ladder, returning the levels.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for ResolutionLadder {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<ResolutionLadder> for Vec<f64> {
    fn from(ladder: ResolutionLadder) -> Self {
        ladder.0
    }
}
