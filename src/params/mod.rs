//! Compact viewer parameter grammars.
//!
//! The viewer is configured through short strings that come from URLs and
//! stored rendering settings. Each grammar has a small hand-written scanner;
//! none of them fail as a whole because of one bad token.
//!
//! # Grammars
//!
//! | Parameter  | Example                            | Parser                          |
//! |------------|------------------------------------|---------------------------------|
//! | channels   | `-1\|111:343$808080,2\|0:255$FF0000` | [`parse_channel_parameters`]    |
//! | projection | `intmax\|0:2`                       | [`parse_projection_parameter`]  |
//! | model      | `c`, `color`, `greyscale`          | [`ImageModel::from_param`]      |
//! | target     | `ol3_viewer_344455`                | [`parse_target_id`]             |
//!
//! [`ViewerQuery`] decodes all of them from an URL query string at once.

mod channel;
mod model;
mod projection;
mod query;
mod scan;
mod target;

pub use channel::{
    parse_channel_maps, parse_channel_parameters, parse_channel_token, ChannelDescriptor,
};
pub use model::ImageModel;
pub use projection::{parse_projection_parameter, Projection, ProjectionSpec};
pub use query::ViewerQuery;
pub use scan::{parse_int_prefix, parse_real_prefix};
pub use target::{parse_target_id, TargetId};
