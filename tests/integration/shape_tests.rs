//! Shape record integration tests.
//!
//! Tests verify:
//! - Raw server records normalize to typed shape records
//! - Composite ids are split into roi and shape ids
//! - Unusable records are dropped by the fail-soft wrapper

use serde_json::json;

use iviewer::shape::{
    amend_shape_definition, extract_roi_and_shape_id, normalize_shape, RoiShapeId, UNATTACHED,
    UNKNOWN_MEASURE,
};

use super::test_utils::{raw_shape, ROI_SCHEMA};

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_normalize_defaults() {
    let shape = normalize_shape(raw_shape("Ellipse")).unwrap();

    assert_eq!(shape.kind, "ellipse");
    assert_eq!(shape.schema_type, format!("{}#Ellipse", ROI_SCHEMA));
    assert_eq!(shape.id, Some(41));
    assert_eq!(shape.the_z.as_i64(), Some(UNATTACHED));
    assert_eq!(shape.the_t.as_i64(), Some(UNATTACHED));
    assert_eq!(shape.the_c.as_i64(), Some(UNATTACHED));
    assert!(shape.spans_all_planes());
    assert_eq!(shape.length, UNKNOWN_MEASURE);
    assert_eq!(shape.area, UNKNOWN_MEASURE);
}

#[test]
fn test_normalize_hoists_permissions() {
    let shape = normalize_shape(raw_shape("Point")).unwrap();

    assert_eq!(shape.permissions, Some(json!({ "canEdit": true, "canDelete": false })));
    assert!(!shape.extra.contains_key("omero:details"));
    assert_eq!(shape.extra.get("X"), Some(&json!(10.0)));
}

#[test]
fn test_normalize_keeps_dimensions() {
    let mut raw = raw_shape("Line");
    raw["TheZ"] = json!(3);
    raw["TheT"] = json!(0);
    raw["TheC"] = json!(0.5);
    raw["Length"] = json!(12.5);

    let shape = normalize_shape(raw).unwrap();
    assert_eq!(shape.the_z.as_i64(), Some(3));
    assert_eq!(shape.the_t.as_i64(), Some(0));
    assert_eq!(shape.the_c.as_f64(), Some(0.5));
    assert!(!shape.spans_all_channels());
    assert_eq!(shape.length, 12.5);
    assert!(!shape.spans_all_planes());
}

#[test]
fn test_normalize_old_id() {
    let mut raw = raw_shape("Rectangle");
    raw["oldId"] = json!("2:4");

    let shape = normalize_shape(raw).unwrap();
    assert_eq!(shape.id, Some(4));
    assert_eq!(shape.shape_id.as_deref(), Some("2:4"));
}

#[test]
fn test_normalized_json() {
    let shape = normalize_shape(raw_shape("Polygon")).unwrap();
    let json = serde_json::to_value(&shape).unwrap();

    assert_eq!(json["type"], "polygon");
    assert_eq!(json["@id"], 41);
    assert_eq!(json["TheZ"], -1);
    assert_eq!(json["Area"], -1.0);
    assert_eq!(json["Y"], 20.0);
}

#[test]
fn test_unusable_records() {
    assert!(normalize_shape(json!([1, 2])).is_err());
    assert!(normalize_shape(json!({ "X": 1 })).is_err());
    assert!(normalize_shape(json!({ "@type": "Rectangle" })).is_err());

    assert!(amend_shape_definition(json!("shape")).is_none());
    assert!(amend_shape_definition(raw_shape("Label")).is_some());
}

// =============================================================================
// Composite Ids
// =============================================================================

#[test]
fn test_composite_ids() {
    assert_eq!(
        extract_roi_and_shape_id("12:345"),
        RoiShapeId {
            roi_id: Some(12),
            shape_id: Some(345)
        }
    );
    assert_eq!(extract_roi_and_shape_id("1:"), RoiShapeId::default());
    assert_eq!(extract_roi_and_shape_id(":12"), RoiShapeId::default());
    assert_eq!(extract_roi_and_shape_id("12345"), RoiShapeId::default());
}
