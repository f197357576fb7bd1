//! Composite `roi_id:shape_id` ids.

use serde::Serialize;

use crate::params::parse_int_prefix;

/// Shortest composite id that can hold both parts (`1:2`).
const MIN_COMPOSITE_ID_LEN: usize = 3;

/// Region of interest and shape ids split from a composite id.
///
/// Either part is `None` when it does not start with an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RoiShapeId {
    pub roi_id: Option<i64>,
    pub shape_id: Option<i64>,
}

/// Split a composite id such as `2:4` into its roi and shape ids.
///
/// Ids shorter than three characters or without a colon after the first
/// character yield neither part. Otherwise both sides are parsed on their own,
/// so `abc:4` still yields the shape id.
///
/// # Example
///
/// ```
/// use iviewer::shape::extract_roi_and_shape_id;
///
/// let ids = extract_roi_and_shape_id("2:4");
/// assert_eq!((ids.roi_id, ids.shape_id), (Some(2), Some(4)));
/// ```
pub fn extract_roi_and_shape_id(id: &str) -> RoiShapeId {
    if id.chars().count() < MIN_COMPOSITE_ID_LEN {
        return RoiShapeId::default();
    }

    match id.split_once(':') {
        Some((roi, shape)) if !roi.is_empty() => RoiShapeId {
            roi_id: parse_int_prefix(roi),
            shape_id: parse_int_prefix(shape),
        },
        _ => RoiShapeId::default(),
    }
}
