//! Default geometric resolution ladder.
//!
//! Used when an image has no pyramid metadata (untiled sources) and as the
//! fallback of [`super::prepare_resolutions`].

use tracing::debug;

use super::{ResolutionLadder, NATIVE_RESOLUTION};

/// Default zoom-in step.
pub const DEFAULT_ZOOM_IN: f64 = 0.2;

/// Default zoom-out step.
pub const DEFAULT_ZOOM_OUT: f64 = 1.0;

/// Zoom-out levels stay strictly below this factor.
pub const MAX_ZOOM_OUT_RESOLUTION: f64 = 5.0;

/// Zoom-in levels stay strictly above this factor.
pub const MIN_ZOOM_IN_RESOLUTION: f64 = 0.01;

/// Accepted zoom-in steps: `[0.01, 1)`.
pub const ZOOM_IN_RANGE: (f64, f64) = (0.01, 1.0);

/// Accepted zoom-out steps: `[0.1, 5)`.
pub const ZOOM_OUT_RANGE: (f64, f64) = (0.1, 5.0);

/// Generate a default resolution ladder from a zoom-in and zoom-out step.
///
/// Zoom-out levels are `1 + zoom_out`, `1 + 2·zoom_out`, ... below 5, listed
/// coarsest first. They are followed by the native resolution and then by the
/// zoom-in levels `1 - zoom_in`, `1 - 2·zoom_in`, ... above 0.01.
///
/// # Arguments
///
/// * `zoom_in` - Zoom-in step in `[0.01, 1)`, defaults to 0.2
/// * `zoom_out` - Zoom-out step in `[0.1, 5)`, defaults to 1
///
/// Missing, non-finite or out-of-range steps silently use the default, so
/// `generate_default_resolutions(Some(2.0), None)` is the same ladder as
/// `generate_default_resolutions(None, None)`.
pub fn generate_default_resolutions(zoom_in: Option<f64>, zoom_out: Option<f64>) -> ResolutionLadder {
    let zoom_in = step_or_default(zoom_in, ZOOM_IN_RANGE, DEFAULT_ZOOM_IN);
    let zoom_out = step_or_default(zoom_out, ZOOM_OUT_RANGE, DEFAULT_ZOOM_OUT);

    let mut levels = Vec::new();

    let mut z = NATIVE_RESOLUTION + zoom_out;
    while z < MAX_ZOOM_OUT_RESOLUTION {
        levels.push(z);
        z += zoom_out;
    }
    levels.reverse();

    levels.push(NATIVE_RESOLUTION);

    let mut z = NATIVE_RESOLUTION - zoom_in;
    while z > MIN_ZOOM_IN_RESOLUTION {
        levels.push(z);
        z -= zoom_in;
    }

    ResolutionLadder::from_levels(levels)
}

fn step_or_default(step: Option<f64>, (min, max): (f64, f64), default: f64) -> f64 {
    match step {
        Some(s) if s.is_finite() && s >= min && s < max => s,
        Some(s) => {
            debug!(step = s, min, max, "Zoom step out of range, using default {}", default);
            default
        }
        None => default,
    }
}
