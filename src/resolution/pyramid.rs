//! Resolution ladders for tiled pyramid sources.
//!
//! A tiled source exposes only a handful of native resolutions, typically
//! powers of two (`[4, 2, 1]`). Zooming straight from one native level to
//! the next feels abrupt, so the gaps on the zoom-out side are subdivided and
//! the ladder is padded on both ends to give the viewer room to zoom.
//!
//! # Normalization Steps
//!
//! 1. Drop non-positive and non-finite hints, collapse duplicates
//! 2. Fall back to the default ladder when no usable hints remain
//! 3. Insert the native resolution if the source does not list it
//! 4. Subdivide every zoom-out gap into [`SUBDIVISIONS_PER_LEVEL`] steps
//! 5. Keep zoom-in hints unchanged
//! 6. Pad alternately at the coarse and fine ends

use std::collections::VecDeque;

use tracing::debug;

use super::ladder::generate_default_resolutions;
use super::{ResolutionLadder, NATIVE_RESOLUTION};

// =============================================================================
// Constants
// =============================================================================

/// Zoom-in step of the fallback ladder used when no hints are available.
pub const PYRAMID_ZOOM_IN: f64 = 0.025;

/// Zoom-out step of the fallback ladder used when no hints are available.
pub const PYRAMID_ZOOM_OUT: f64 = 0.10;

/// Number of steps each gap between native zoom-out levels is split into.
pub const SUBDIVISIONS_PER_LEVEL: usize = 8;

/// Levels added by padding when the ladder has more than one level.
const PADDING_LEVELS: usize = 10;

/// Target level count when subdivision produced a single level.
const SINGLE_LEVEL_TARGET: usize = 20;

/// Growth factor for each level padded at the coarse end.
const FRONT_PADDING_FACTOR: f64 = 1.20;

/// Shrink divisor for each level padded at the fine end.
const BACK_PADDING_DIVISOR: f64 = 1.10;

// =============================================================================
// Normalizer
// =============================================================================

/// Build a dense zoom ladder from the resolutions a pyramid source exposes.
///
/// Returns the default ladder with steps ([`PYRAMID_ZOOM_IN`],
/// [`PYRAMID_ZOOM_OUT`]) when `resolutions` is `None`, empty, or only the
/// native resolution.
///
/// The native levels on the zoom-out side are kept exactly and
/// [`SUBDIVISIONS_PER_LEVEL`] evenly spaced levels are placed in each gap.
/// Zoom-in hints are kept verbatim. The result is then padded to
/// `len + 10` levels (20 if only one level exists).
///
/// # Example
///
/// ```
/// use iviewer::resolution::prepare_resolutions;
///
/// let ladder = prepare_resolutions(Some(&[4.0, 2.0, 1.0, 0.5]));
/// assert!(ladder.as_slice().contains(&0.5));
/// assert_eq!(ladder.len(), 28);
/// ```
pub fn prepare_resolutions(resolutions: Option<&[f64]>) -> ResolutionLadder {
    let mut sorted: Vec<f64> = resolutions
        .unwrap_or(&[])
        .iter()
        .copied()
        .filter(|r| r.is_finite() && *r > 0.0)
        .collect();
    sort_descending(&mut sorted);
    sorted.dedup();

    if sorted.is_empty() || sorted == [NATIVE_RESOLUTION] {
        debug!("No usable pyramid resolutions, generating default ladder");
        return generate_default_resolutions(Some(PYRAMID_ZOOM_IN), Some(PYRAMID_ZOOM_OUT));
    }

    if !sorted.contains(&NATIVE_RESOLUTION) {
        sorted.push(NATIVE_RESOLUTION);
        sort_descending(&mut sorted);
    }
    let pivot = sorted
        .iter()
        .position(|&r| r == NATIVE_RESOLUTION)
        .unwrap_or(sorted.len() - 1);

    let mut levels = vec![NATIVE_RESOLUTION];

    // Walk from the pivot toward the coarsest level
    for i in (1..=pivot).rev() {
        levels.extend(subdivide(sorted[i], sorted[i - 1]));
    }

    // Zoom-in hints (rare for tiled sources) are kept as they are
    levels.extend_from_slice(&sorted[pivot + 1..]);
    sort_descending(&mut levels);

    let levels = pad(levels, pivot);
    debug!(
        hints = sorted.len(),
        levels = levels.len(),
        "Prepared pyramid resolution ladder"
    );

    ResolutionLadder::from_levels(levels)
}

/// Levels strictly above `finer` up to and including `coarser`.
///
/// Steps too small to change the value in floating point are skipped, so a
/// very narrow gap yields fewer than [`SUBDIVISIONS_PER_LEVEL`] levels.
fn subdivide(finer: f64, coarser: f64) -> impl Iterator<Item = f64> {
    let step = (coarser - finer).abs() / SUBDIVISIONS_PER_LEVEL as f64;
    let mut previous = finer;
    (1..=SUBDIVISIONS_PER_LEVEL)
        .map(move |j| {
            if j == SUBDIVISIONS_PER_LEVEL {
                coarser
            } else {
                finer + j as f64 * step
            }
        })
        .filter(move |&level| {
            let rises = level > previous;
            if rises {
                previous = level;
            }
            rises
        })
}

/// Pad the ladder at both ends, alternating sides.
///
/// `pivot` is the index of the native resolution in the sorted source hints.
/// Padding starts at the fine end only when `levels.len() - pivot < pivot`.
///
/// An end is closed once its next level would overflow, underflow, or not
/// move past the current end. The other end keeps padding alone, and the
/// ladder may stay short of the target when both ends are closed.
fn pad(levels: Vec<f64>, pivot: usize) -> Vec<f64> {
    let target = if levels.len() == 1 {
        SINGLE_LEVEL_TARGET
    } else {
        levels.len() + PADDING_LEVELS
    };

    let mut insert_front = !starts_padding_at_back(levels.len(), pivot);
    let mut front_open = true;
    let mut back_open = true;
    let mut levels: VecDeque<f64> = levels.into();

    while levels.len() < target && (front_open || back_open) {
        if insert_front && front_open {
            let coarsest = levels.front().copied().unwrap_or(NATIVE_RESOLUTION);
            let padded = coarsest * FRONT_PADDING_FACTOR;
            if padded.is_finite() && padded > coarsest {
                levels.push_front(padded);
            } else {
                debug!(coarsest, "Coarse end cannot be padded further");
                front_open = false;
            }
        } else if !insert_front && back_open {
            let finest = levels.back().copied().unwrap_or(NATIVE_RESOLUTION);
            let padded = finest / BACK_PADDING_DIVISOR;
            if padded > 0.0 && padded < finest {
                levels.push_back(padded);
            } else {
                debug!(finest, "Fine end cannot be padded further");
                back_open = false;
            }
        }
        insert_front = !insert_front;
    }

    levels.into()
}

/// Which end receives the first padded level.
///
/// This compares the level count past the source pivot index against the
/// pivot index itself. Since subdivision yields at least eight levels per
/// zoom-out hint, the comparison practically always picks the front.
fn starts_padding_at_back(level_count: usize, pivot: usize) -> bool {
    level_count.saturating_sub(pivot) < pivot
}

fn sort_descending(values: &mut [f64]) {
    values.sort_by(|a, b| b.total_cmp(a));
}
