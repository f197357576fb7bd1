//! Normalization of shape records as delivered by the server.
//!
//! Shapes arrive as schema-annotated JSON objects:
//!
//! ```json
//! {
//!   "@type": "http://www.openmicroscopy.org/Schemas/OME/2016-06#Rectangle",
//!   "@id": 4,
//!   "oldId": "2:4",
//!   "X": 10.0, "Y": 20.0, "Width": 5.0, "Height": 5.0,
//!   "omero:details": { "permissions": { "canEdit": true } }
//! }
//! ```
//!
//! Normalization turns such a record into a [`ShapeRecord`]:
//!
//! - `type` is the lower-cased name after the last `#` (`rectangle`)
//! - `permissions` are hoisted out of `omero:details`
//! - a composite `oldId` (set after saving) overrides `@id` and `shape_id`
//! - `TheZ`, `TheT`, `TheC` default to [`UNATTACHED`] unless already numeric
//! - `Length`, `Area` default to [`UNKNOWN_MEASURE`]
//!
//! All other fields are carried through untouched.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use tracing::debug;

use super::id::extract_roi_and_shape_id;
use crate::error::{json_kind, ShapeError};

/// Dimension index of a shape that is not bound to a specific plane.
pub const UNATTACHED: i64 = -1;

/// Length or area that has not been computed.
pub const UNKNOWN_MEASURE: f64 = -1.0;

const TYPE_KEY: &str = "@type";
const ID_KEY: &str = "@id";
const DETAILS_KEY: &str = "omero:details";
const PERMISSIONS_KEY: &str = "permissions";
const OLD_ID_KEY: &str = "oldId";
const SHAPE_ID_KEY: &str = "shape_id";
const SCHEMA_SEPARATOR: char = '#';

// =============================================================================
// ShapeRecord
// =============================================================================

/// A shape record with its type extracted and defaults filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeRecord {
    /// Lower-cased local type name, e.g. `rectangle`
    #[serde(rename = "type")]
    pub kind: String,

    /// Schema-qualified type as received
    #[serde(rename = "@type")]
    pub schema_type: String,

    /// Shape id
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Composite `roi_id:shape_id` id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Value>,

    #[serde(rename = "TheZ")]
    pub the_z: Number,

    #[serde(rename = "TheT")]
    pub the_t: Number,

    #[serde(rename = "TheC")]
    pub the_c: Number,

    #[serde(rename = "Length")]
    pub length: f64,

    #[serde(rename = "Area")]
    pub area: f64,

    /// Remaining fields of the raw record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShapeRecord {
    /// Whether the shape is shown on every z-plane.
    pub fn spans_all_planes(&self) -> bool {
        is_unattached(&self.the_z)
    }

    /// Whether the shape is shown at every time point.
    pub fn spans_all_timepoints(&self) -> bool {
        is_unattached(&self.the_t)
    }

    /// Whether the shape is shown for every channel.
    pub fn spans_all_channels(&self) -> bool {
        is_unattached(&self.the_c)
    }
}

fn is_unattached(dimension: &Number) -> bool {
    dimension.as_f64() == Some(UNATTACHED as f64)
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalize a raw shape record.
///
/// # Errors
///
/// Returns an error if the record is not an object, or if its `@type` is
/// missing, not a string, or not schema qualified.
pub fn normalize_shape(raw: Value) -> Result<ShapeRecord, ShapeError> {
    let mut map = match raw {
        Value::Object(map) => map,
        other => return Err(ShapeError::NotAnObject(json_kind(&other))),
    };

    let schema_type = match map.remove(TYPE_KEY) {
        Some(Value::String(t)) => t,
        _ => return Err(ShapeError::MissingType),
    };
    let kind = match schema_type.rsplit_once(SCHEMA_SEPARATOR) {
        Some((_, local)) => local.to_lowercase(),
        None => return Err(ShapeError::UnqualifiedType(schema_type)),
    };
    map.remove("type");

    let top_level_permissions = map.remove(PERMISSIONS_KEY);
    let permissions = hoist_permissions(&mut map).or(top_level_permissions);

    let raw_id = map.remove(ID_KEY);
    let raw_shape_id = map.remove(SHAPE_ID_KEY);
    let mut id = raw_id.as_ref().and_then(as_integral);
    let mut shape_id = raw_shape_id
        .as_ref()
        .and_then(Value::as_str)
        .map(str::to_string);

    // After saving, the server reports the composite id in oldId
    if let Some(old_id) = map.get(OLD_ID_KEY).and_then(Value::as_str) {
        if let Some(new_id) = extract_roi_and_shape_id(old_id).shape_id {
            shape_id = Some(old_id.to_string());
            id = Some(new_id);
        }
    }

    // Keep raw values we could not interpret
    if id.is_none() {
        if let Some(v) = raw_id {
            map.insert(ID_KEY.to_string(), v);
        }
    }
    if shape_id.is_none() {
        if let Some(v) = raw_shape_id {
            map.insert(SHAPE_ID_KEY.to_string(), v);
        }
    }

    // Any number is kept as sent, fractional or not
    let mut dimension = |key: &str| match map.remove(key) {
        Some(Value::Number(n)) => n,
        _ => Number::from(UNATTACHED),
    };
    let the_z = dimension("TheZ");
    let the_t = dimension("TheT");
    let the_c = dimension("TheC");

    let mut measure = |key: &str| {
        map.remove(key)
            .as_ref()
            .and_then(Value::as_f64)
            .unwrap_or(UNKNOWN_MEASURE)
    };
    let length = measure("Length");
    let area = measure("Area");

    Ok(ShapeRecord {
        kind,
        schema_type,
        id,
        shape_id,
        permissions,
        the_z,
        the_t,
        the_c,
        length,
        area,
        extra: map,
    })
}

/// Normalize a raw shape record, returning `None` if it is unusable.
pub fn amend_shape_definition(raw: Value) -> Option<ShapeRecord> {
    normalize_shape(raw)
        .map_err(|e| debug!("Dropping shape record: {}", e))
        .ok()
}

/// Take `permissions` out of `omero:details`, dropping the details wrapper.
///
/// Only done when both are objects; otherwise the record is left unchanged.
fn hoist_permissions(map: &mut Map<String, Value>) -> Option<Value> {
    let has_permissions = map
        .get(DETAILS_KEY)
        .and_then(|details| details.get(PERMISSIONS_KEY))
        .is_some_and(Value::is_object);
    if !has_permissions {
        return None;
    }

    match map.remove(DETAILS_KEY) {
        Some(Value::Object(mut details)) => details.remove(PERMISSIONS_KEY),
        _ => None,
    }
}

fn as_integral(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}
