//! Region of interest shapes.
//!
//! Shape records come from the server as loosely typed JSON. This module
//! validates them at the boundary into [`ShapeRecord`] and handles the
//! composite `roi_id:shape_id` ids the server uses after saving.

mod id;
mod record;

pub use id::{extract_roi_and_shape_id, RoiShapeId};
pub use record::{
    amend_shape_definition, normalize_shape, ShapeRecord, UNATTACHED, UNKNOWN_MEASURE,
};
