//! Channel rendering parameters.
//!
//! Rendering settings travel as a compact string with one token per channel:
//!
//! ```text
//! -1|111:343$808080,2|0:255$FF0000
//!  │  │   │   │
//!  │  │   │   └── color (hex or named, passed through)
//!  │  │   └────── window end
//!  │  └────────── window start
//!  └───────────── 1-based channel number, negative = inactive
//! ```
//!
//! Malformed tokens are dropped one by one; the rest of the list survives.
//! Per-channel inversion flags arrive separately as a JSON array
//! (see [`parse_channel_maps`]).

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::scan::parse_int_prefix;
use crate::error::{json_kind, ChannelMapsError, ChannelTokenError};

/// Separates channel tokens.
const TOKEN_SEPARATOR: char = ',';

/// Separates the channel number from the window.
const CHANNEL_SEPARATOR: char = '|';

/// Separates the window from the color.
const COLOR_SEPARATOR: char = '$';

/// Separates window start and end.
const WINDOW_SEPARATOR: char = ':';

// =============================================================================
// ChannelDescriptor
// =============================================================================

/// Rendering parameters of a single channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelDescriptor {
    /// Zero-based channel index
    pub index: usize,

    /// Whether the channel is rendered
    pub active: bool,

    /// Start of the intensity window
    pub start: i64,

    /// End of the intensity window (not required to exceed `start`)
    pub end: i64,

    /// Color token, e.g. `FF0000`
    pub color: String,

    /// Inverted lookup, present only when the maps side-channel covers this channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverted: Option<bool>,
}

/// Parse a single channel token such as `-1|111:343$808080`.
///
/// The token must already be free of whitespace.
pub fn parse_channel_token(token: &str) -> Result<ChannelDescriptor, ChannelTokenError> {
    let (number, rest) = token
        .split_once(CHANNEL_SEPARATOR)
        .ok_or_else(|| ChannelTokenError::MissingChannelSeparator(token.to_string()))?;

    let number = parse_int_prefix(number)
        .filter(|&n| n != 0)
        .ok_or_else(|| ChannelTokenError::InvalidChannelNumber(number.to_string()))?;
    let index = usize::try_from(number.unsigned_abs() - 1)
        .map_err(|_| ChannelTokenError::InvalidChannelNumber(number.to_string()))?;

    let (window, color) = rest
        .split_once(COLOR_SEPARATOR)
        .ok_or_else(|| ChannelTokenError::MissingColorSeparator(token.to_string()))?;
    let (start, end) =
        parse_window(window).ok_or_else(|| ChannelTokenError::InvalidWindow(window.to_string()))?;

    Ok(ChannelDescriptor {
        index,
        active: number > 0,
        start,
        end,
        color: color.to_string(),
        inverted: None,
    })
}

/// Parse `start:end`. Exactly two parts, both starting with an integer.
pub(crate) fn parse_window(window: &str) -> Option<(i64, i64)> {
    let mut parts = window.split(WINDOW_SEPARATOR);
    let (start, end) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    Some((parse_int_prefix(start)?, parse_int_prefix(end)?))
}

// =============================================================================
// Channel list
// =============================================================================

/// Parse a channel parameter string and an optional maps side-channel.
///
/// # Arguments
///
/// * `channel_info` - Comma separated channel tokens, whitespace is ignored
/// * `maps_info` - Optional JSON array with `inverted.enabled` flags per channel,
///   `&quot;` entities are accepted in place of quotes
///
/// # Returns
///
/// `None` if `channel_info` is empty. Otherwise the descriptors of every
/// well-formed token, possibly none. A malformed `maps_info` is ignored and
/// the descriptors are returned without inversion flags.
///
/// # Example
///
/// ```
/// use iviewer::params::parse_channel_parameters;
///
/// let channels = parse_channel_parameters("-1|111:343$808080,2|0:255$FF0000", None).unwrap();
/// assert_eq!(channels.len(), 2);
/// assert!(!channels[0].active);
/// assert_eq!(channels[1].index, 1);
/// ```
pub fn parse_channel_parameters(
    channel_info: &str,
    maps_info: Option<&str>,
) -> Option<Vec<ChannelDescriptor>> {
    if channel_info.is_empty() {
        return None;
    }

    let compact: String = channel_info.chars().filter(|c| !c.is_whitespace()).collect();

    let mut channels: Vec<ChannelDescriptor> = compact
        .split(TOKEN_SEPARATOR)
        .filter_map(|token| match parse_channel_token(token) {
            Ok(channel) => Some(channel),
            Err(e) => {
                debug!("Skipping channel token: {}", e);
                None
            }
        })
        .collect();

    if let Some(maps) = maps_info.filter(|m| !m.is_empty()) {
        match parse_channel_maps(maps) {
            Ok(flags) => apply_inversion(&mut channels, &flags),
            Err(e) => debug!("Ignoring channel maps: {}", e),
        }
    }

    Some(channels)
}

/// Parse the maps side-channel into per-channel inversion flags.
///
/// Each object entry yields `Some(enabled)` where `enabled` is true only if
/// the entry has `"inverted": {"enabled": true}`. Entries that are not
/// objects yield `None` and leave the matching channel untouched.
pub fn parse_channel_maps(maps_info: &str) -> Result<Vec<Option<bool>>, ChannelMapsError> {
    let unescaped = maps_info.replace("&quot;", "\"");
    let maps: Value = serde_json::from_str(&unescaped)?;

    let Some(entries) = maps.as_array() else {
        return Err(ChannelMapsError::NotAnArray(json_kind(&maps)));
    };

    Ok(entries
        .iter()
        .map(|entry| {
            entry.as_object().map(|m| {
                m.get("inverted")
                    .and_then(|inv| inv.get("enabled"))
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
            })
        })
        .collect())
}

fn apply_inversion(channels: &mut [ChannelDescriptor], flags: &[Option<bool>]) {
    for (channel, flag) in channels.iter_mut().zip(flags) {
        if flag.is_some() {
            channel.inverted = *flag;
        }
    }
}
