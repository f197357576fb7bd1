//! Image color model parameter (`m=c` / `m=g`).

use std::fmt;

use serde::Serialize;

/// Whether an image is rendered in color or as greyscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageModel {
    Color,
    #[default]
    Greyscale,
}

impl ImageModel {
    /// Interpret a model parameter.
    ///
    /// Anything starting with `c` (any case), including `color`, selects
    /// [`ImageModel::Color`]; everything else, including a missing value,
    /// is greyscale.
    pub fn from_param(model: Option<&str>) -> Self {
        match model.and_then(|m| m.chars().next()) {
            Some(c) if c.eq_ignore_ascii_case(&'c') => ImageModel::Color,
            _ => ImageModel::Greyscale,
        }
    }

    /// Map the viewer's greyscale toggle back to a model.
    pub fn from_greyscale_flag(greyscale: bool) -> Self {
        if greyscale {
            ImageModel::Greyscale
        } else {
            ImageModel::Color
        }
    }

    pub fn is_greyscale(&self) -> bool {
        matches!(self, ImageModel::Greyscale)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageModel::Color => "color",
            ImageModel::Greyscale => "greyscale",
        }
    }
}

impl fmt::Display for ImageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
