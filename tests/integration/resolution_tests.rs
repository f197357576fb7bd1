//! Zoom ladder integration tests.
//!
//! Tests verify:
//! - Default ladders bracket the native resolution
//! - Invalid steps fall back silently
//! - Pyramid hints are densified and padded
//! - Missing hints fall back to the pyramid default ladder

use iviewer::resolution::{
    generate_default_resolutions, prepare_resolutions, PYRAMID_ZOOM_IN, PYRAMID_ZOOM_OUT,
};

use super::test_utils::{assert_strictly_descending, pivot_count};

// =============================================================================
// Default Ladder
// =============================================================================

#[test]
fn test_default_ladder_properties() {
    for (zoom_in, zoom_out) in [(None, None), (Some(0.1), Some(0.5)), (Some(0.025), Some(0.1))] {
        let ladder = generate_default_resolutions(zoom_in, zoom_out);
        let levels = ladder.as_slice();

        assert_strictly_descending(levels);
        assert_eq!(pivot_count(levels), 1);

        let pivot = ladder.pivot_index().unwrap();
        assert!(levels[..pivot].iter().all(|&r| r > 1.0));
        assert!(levels[pivot + 1..].iter().all(|&r| r < 1.0 && r > 0.0));
    }
}

#[test]
fn test_invalid_zoom_in_matches_omitted() {
    assert_eq!(
        generate_default_resolutions(Some(2.0), None),
        generate_default_resolutions(None, None)
    );
    assert_eq!(
        generate_default_resolutions(Some(-0.5), Some(100.0)),
        generate_default_resolutions(None, None)
    );
}

// =============================================================================
// Pyramid Ladder
// =============================================================================

#[test]
fn test_pyramid_ladder() {
    let input = [4.0, 2.0, 1.0, 0.5];
    let ladder = prepare_resolutions(Some(&input));
    let levels = ladder.as_slice();

    assert!(levels.contains(&1.0));
    assert_eq!(pivot_count(levels), 1);
    assert_strictly_descending(levels);
    assert!(levels.len() >= input.len() + 10);
    assert!(levels.contains(&0.5));
}

#[test]
fn test_pyramid_native_levels_are_anchors() {
    let ladder = prepare_resolutions(Some(&[16.0, 4.0, 1.0]));
    let levels = ladder.as_slice();

    assert!(levels.contains(&16.0));
    assert!(levels.contains(&4.0));

    // Eight evenly spaced levels between 4 and 16
    let between: Vec<f64> = levels.iter().copied().filter(|&r| r > 4.0 && r <= 16.0).collect();
    assert_eq!(between.len(), 8);
    for pair in between.windows(2) {
        assert!((pair[0] - pair[1] - 1.5).abs() < 1e-9);
    }
}

#[test]
fn test_null_hints_match_pyramid_default() {
    let expected = generate_default_resolutions(Some(PYRAMID_ZOOM_IN), Some(PYRAMID_ZOOM_OUT));

    assert_eq!(prepare_resolutions(None), expected);
    assert_eq!(prepare_resolutions(Some(&[])), expected);
    assert_eq!(prepare_resolutions(Some(&[1.0])), expected);
}

#[test]
fn test_ladder_json() {
    let ladder = prepare_resolutions(Some(&[2.0, 1.0]));
    let json = serde_json::to_value(&ladder).unwrap();

    let array = json.as_array().unwrap();
    assert_eq!(array.len(), ladder.len());
    assert!(array.iter().any(|v| v.as_f64() == Some(1.0)));
}

#[test]
fn test_extreme_hints_keep_ladder_invariants() {
    for hints in [&[1e308][..], &[1.0000000000000002, 1.0], &[1.0, 5e-324], &[f64::MAX, 2.0]] {
        let ladder = prepare_resolutions(Some(hints));
        let levels = ladder.as_slice();

        assert_strictly_descending(levels);
        assert_eq!(pivot_count(levels), 1, "{:?}", hints);
        assert!(levels.iter().all(|r| r.is_finite() && *r > 0.0), "{:?}", hints);

        let json = serde_json::to_value(&ladder).unwrap();
        assert!(json.as_array().unwrap().iter().all(|v| v.is_f64()));
    }
}
