//! # iviewer
//!
//! Parameter core of a browser-hosted microscopy image viewer.
//!
//! The viewer is configured from compact encodings supplied by the server
//! and by URLs. This library turns them into structured configuration:
//!
//! - **Zoom ladders**: dense resolution lists from sparse pyramid hints
//! - **Channel parameters**: `-1|111:343$808080,2|0:255$FF0000`
//! - **Projection**: `intmax|0:2`
//! - **Colors**: `rgba(r,g,b,a)` to and from packed signed integers
//! - **Shapes**: schema-annotated shape records into a typed model
//!
//! Every transformation is a pure function. Malformed input is tolerated
//! token by token; only a few hard preconditions make a call yield nothing.
//!
//! ## Architecture
//!
//! - [`resolution`] - Default and pyramid zoom ladders
//! - [`params`] - Channel, projection, model, target and query grammars
//! - [`color`] - Color codec
//! - [`shape`] - Shape record normalization and composite ids
//! - [`config`] - CLI configuration types
//!
//! ## Example
//!
//! ```rust
//! use iviewer::{parse_channel_parameters, parse_projection_parameter, prepare_resolutions};
//!
//! let ladder = prepare_resolutions(Some(&[4.0, 2.0, 1.0]));
//! assert_eq!(ladder.pivot_index(), Some(ladder.zoom_out_levels().len()));
//!
//! let channels = parse_channel_parameters("1|0:255$FF0000", None).unwrap();
//! assert!(channels[0].active);
//!
//! let projection = parse_projection_parameter("split");
//! assert_eq!(projection.projection.as_str(), "split");
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod params;
pub mod resolution;
pub mod shape;

// Re-export commonly used types
pub use color::{rgba_to_signed_integer, signed_integer_to_rgba, Rgba};
pub use config::{
    ChannelsConfig, Cli, ColorCommand, Command, ProjectionConfig, QueryConfig, ResolutionsConfig,
    ShapeConfig,
};
pub use error::{ChannelMapsError, ChannelTokenError, ColorError, ShapeError, UnknownProjection};
pub use params::{
    parse_channel_maps, parse_channel_parameters, parse_channel_token, parse_projection_parameter,
    parse_target_id, ChannelDescriptor, ImageModel, Projection, ProjectionSpec, TargetId,
    ViewerQuery,
};
pub use resolution::{
    generate_default_resolutions, prepare_resolutions, ResolutionLadder, NATIVE_RESOLUTION,
};
pub use shape::{
    amend_shape_definition, extract_roi_and_shape_id, normalize_shape, RoiShapeId, ShapeRecord,
};
