//! Viewer target element ids.
//!
//! Embedded viewers live in elements named `<prefix>_<config id>`, e.g.
//! `ol3_viewer_344455`. A standalone viewer may use a plain name instead.

use serde::Serialize;

use super::scan::parse_int_prefix;

/// Id extracted from a viewer target element id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TargetId {
    /// Numeric suffix after the last `_`
    Numeric(i64),
    /// Whole element id, when the suffix is not a number
    Named(String),
}

/// Extract the id from a target element id.
///
/// Returns `None` if the element id has no `_`.
pub fn parse_target_id(element_id: &str) -> Option<TargetId> {
    let (_, suffix) = element_id.rsplit_once('_')?;
    Some(match parse_int_prefix(suffix) {
        Some(id) => TargetId::Numeric(id),
        None => TargetId::Named(element_id.to_string()),
    })
}
