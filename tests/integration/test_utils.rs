//! Shared helpers for integration tests.

use serde_json::{json, Value};

/// Schema prefix the server puts in front of every shape type.
pub const ROI_SCHEMA: &str = "http://www.openmicroscopy.org/Schemas/OME/2016-06";

/// Assert that every level is strictly greater than the next.
pub fn assert_strictly_descending(levels: &[f64]) {
    for (i, pair) in levels.windows(2).enumerate() {
        assert!(
            pair[0] > pair[1],
            "level {} ({}) should be greater than level {} ({})",
            i,
            pair[0],
            i + 1,
            pair[1]
        );
    }
}

/// Count entries exactly equal to the native resolution.
pub fn pivot_count(levels: &[f64]) -> usize {
    levels.iter().filter(|&&r| r == 1.0).count()
}

/// A raw shape record of the given local type, as the server delivers it.
pub fn raw_shape(kind: &str) -> Value {
    json!({
        "@type": format!("{}#{}", ROI_SCHEMA, kind),
        "@id": 41,
        "X": 10.0,
        "Y": 20.0,
        "omero:details": {
            "owner": { "@id": 2 },
            "permissions": { "canEdit": true, "canDelete": false }
        }
    })
}
