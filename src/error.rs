use thiserror::Error;

/// Reasons a single channel token is dropped by the channel parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelTokenError {
    /// Token has no `|` separating the channel number from the rest
    #[error("Missing '|' after channel number in token '{0}'")]
    MissingChannelSeparator(String),

    /// Channel number is not an integer or is zero
    #[error("Invalid channel number '{0}'")]
    InvalidChannelNumber(String),

    /// Token has no `$` separating the window from the color
    #[error("Missing '$' before color in token '{0}'")]
    MissingColorSeparator(String),

    /// Window is not exactly two integers separated by `:`
    #[error("Invalid intensity window '{0}': expected <start>:<end>")]
    InvalidWindow(String),
}

/// Errors from the JSON side-channel carrying per-channel inversion flags
#[derive(Debug, Error)]
pub enum ChannelMapsError {
    /// Side-channel is not valid JSON
    #[error("Malformed channel maps JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Side-channel is valid JSON but not an array
    #[error("Channel maps must be a JSON array, got {0}")]
    NotAnArray(&'static str),
}

/// Projection name that is not one of `normal`, `intmax` or `split`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown projection '{0}'")]
pub struct UnknownProjection(pub String);

/// Errors when parsing a color in rgba notation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Fewer than three color components
    #[error("Expected at least 3 color components, got {0}")]
    TooFewComponents(usize),

    /// A red, green or blue component is not an integer in 0..=255
    #[error("Invalid {channel} component '{value}': expected an integer between 0 and 255")]
    InvalidComponent { channel: &'static str, value: String },

    /// Alpha is not a real number in 0..=1
    #[error("Invalid alpha component '{0}': expected a number between 0 and 1")]
    InvalidAlpha(String),
}

/// Errors when normalizing a raw shape record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Raw record is not a JSON object
    #[error("Shape record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// `@type` field is absent or not a string
    #[error("Shape record has no string '@type' field")]
    MissingType,

    /// `@type` carries no schema separator
    #[error("Shape type '{0}' is not schema qualified (no '#')")]
    UnqualifiedType(String),
}

/// Short name of a JSON value's kind, used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
