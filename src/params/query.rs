//! Initial viewer settings from an URL query string.
//!
//! Links into the viewer carry rendering settings as query parameters:
//!
//! - `c` - channel parameters, see [`parse_channel_parameters`]
//! - `maps` - inversion side-channel for `c`
//! - `p` - projection, see [`parse_projection_parameter`]
//! - `m` - color model, see [`ImageModel::from_param`]

use serde::Serialize;
use tracing::trace;
use url::form_urlencoded;

use super::channel::{parse_channel_parameters, ChannelDescriptor};
use super::model::ImageModel;
use super::projection::{parse_projection_parameter, ProjectionSpec};

/// Settings decoded from a viewer query string.
///
/// Every field is `None` when its parameter is absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ViewerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ChannelDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<ProjectionSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ImageModel>,
}

impl ViewerQuery {
    /// Decode a query string, with or without the leading `?`.
    ///
    /// Keys are matched case-insensitively; the last occurrence of a key wins
    /// and unknown keys are ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut channels = None;
        let mut maps = None;
        let mut projection = None;
        let mut model = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.to_ascii_lowercase().as_str() {
                "c" => channels = Some(value.into_owned()),
                "maps" => maps = Some(value.into_owned()),
                "p" => projection = Some(value.into_owned()),
                "m" => model = Some(value.into_owned()),
                other => trace!(key = other, "Ignoring query parameter"),
            }
        }

        Self {
            channels: channels.and_then(|c| parse_channel_parameters(&c, maps.as_deref())),
            projection: projection.map(|p| parse_projection_parameter(&p)),
            model: model.map(|m| ImageModel::from_param(Some(&m))),
        }
    }
}
