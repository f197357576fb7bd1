//! Parameter grammar integration tests.
//!
//! Tests verify:
//! - Channel tokens decode to descriptors, malformed ones are skipped
//! - The maps side-channel sets inversion flags
//! - Projection parameters degrade to the normal projection
//! - Query strings combine all of the above

use iviewer::params::{
    parse_channel_parameters, parse_projection_parameter, parse_target_id, ImageModel, Projection,
    TargetId, ViewerQuery,
};

// =============================================================================
// Channels
// =============================================================================

#[test]
fn test_channel_round_trip_of_fields() {
    let channels = parse_channel_parameters("-1|111:343$808080,2|0:255$FF0000", None).unwrap();

    assert_eq!(channels.len(), 2);

    assert_eq!(channels[0].index, 0);
    assert!(!channels[0].active);
    assert_eq!((channels[0].start, channels[0].end), (111, 343));
    assert_eq!(channels[0].color, "808080");

    assert_eq!(channels[1].index, 1);
    assert!(channels[1].active);
    assert_eq!((channels[1].start, channels[1].end), (0, 255));
    assert_eq!(channels[1].color, "FF0000");
}

#[test]
fn test_channel_parsing_is_fail_soft() {
    assert_eq!(parse_channel_parameters("", None), None);

    let channels = parse_channel_parameters("garbage,1|0:10$00FF00,3|bad$00", None).unwrap();
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].color, "00FF00");

    assert_eq!(parse_channel_parameters("nothing", None), Some(Vec::new()));
}

#[test]
fn test_channel_whitespace_is_ignored() {
    let channels = parse_channel_parameters(" 1 | 0 : 255 $ FF0000 ,\n2|5:6$00FF00", None).unwrap();
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].color, "FF0000");
    assert_eq!(channels[1].start, 5);
}

#[test]
fn test_channel_maps_inversion() {
    let maps = r#"[{"inverted":{"enabled":true}}, {"inverted":{"enabled":false}}]"#;
    let channels = parse_channel_parameters("1|0:255$FF0000,2|0:255$00FF00", Some(maps)).unwrap();

    assert_eq!(channels[0].inverted, Some(true));
    assert_eq!(channels[1].inverted, Some(false));
}

#[test]
fn test_channel_maps_html_escaped() {
    let maps = "[{&quot;inverted&quot;:{&quot;enabled&quot;:true}}]";
    let channels = parse_channel_parameters("1|0:255$FF0000", Some(maps)).unwrap();
    assert_eq!(channels[0].inverted, Some(true));
}

#[test]
fn test_channel_maps_invalid_is_ignored() {
    let channels = parse_channel_parameters("1|0:255$FF0000", Some("{not json")).unwrap();
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].inverted, None);
}

#[test]
fn test_channel_json_shape() {
    let channels = parse_channel_parameters("-3|1:2$ABCDEF", None).unwrap();
    let json = serde_json::to_value(&channels).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{
            "index": 2,
            "active": false,
            "start": 1,
            "end": 2,
            "color": "ABCDEF"
        }])
    );
}

// =============================================================================
// Projection
// =============================================================================

#[test]
fn test_projection_modes() {
    let spec = parse_projection_parameter("intmax|0:2");
    assert_eq!(spec.projection, Projection::IntMax);
    assert_eq!((spec.start, spec.end), (Some(0), Some(2)));

    assert_eq!(parse_projection_parameter("split").projection, Projection::Split);
    assert_eq!(parse_projection_parameter("").projection, Projection::Normal);
}

#[test]
fn test_projection_unknown_mode() {
    for input in ["INTMAX", "median", "intmax0:2"] {
        assert_eq!(
            parse_projection_parameter(input).projection,
            Projection::Normal,
            "{} should fall back to normal",
            input
        );
    }
}

#[test]
fn test_projection_bad_range_keeps_mode() {
    let spec = parse_projection_parameter("intmax|zero:two");
    assert_eq!(spec.projection, Projection::IntMax);
    assert_eq!(spec.start, None);
    assert_eq!(spec.end, None);
}

// =============================================================================
// Model and Target
// =============================================================================

#[test]
fn test_image_model() {
    assert_eq!(ImageModel::from_param(Some("color")), ImageModel::Color);
    assert_eq!(ImageModel::from_param(Some("g")), ImageModel::Greyscale);
    assert_eq!(ImageModel::from_param(None), ImageModel::Greyscale);
}

#[test]
fn test_target_id() {
    assert_eq!(parse_target_id("ol3_viewer_344455"), Some(TargetId::Numeric(344455)));
    assert_eq!(
        parse_target_id("ol3_viewer"),
        Some(TargetId::Named("ol3_viewer".to_string()))
    );
    assert_eq!(parse_target_id("viewer"), None);
}

// =============================================================================
// Query
// =============================================================================

#[test]
fn test_query_string() {
    let query = ViewerQuery::parse("?C=1|0:255$FF0000&p=split&m=c&zoom=50");

    assert_eq!(query.channels.as_ref().map(Vec::len), Some(1));
    assert_eq!(query.projection.unwrap().projection, Projection::Split);
    assert_eq!(query.model, Some(ImageModel::Color));
}

#[test]
fn test_query_percent_encoded() {
    let query = ViewerQuery::parse("c=-1%7C111%3A343%24808080");

    let channels = query.channels.unwrap();
    assert_eq!(channels.len(), 1);
    assert!(!channels[0].active);
    assert_eq!(channels[0].end, 343);
}

#[test]
fn test_query_empty() {
    assert_eq!(ViewerQuery::parse(""), ViewerQuery::default());
    assert_eq!(ViewerQuery::parse("?"), ViewerQuery::default());
}
