//! Background color parsing

use crate::error::{Error, Result};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canvas fill color, written as `#RRGGBB` or `#RRGGBBAA`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BackgroundColor(Rgba<u8>);

impl BackgroundColor {
    pub const WHITE: Self = Self(Rgba([255, 255, 255, 255]));
    pub const TRANSPARENT: Self = Self(Rgba([0, 0, 0, 0]));

    pub fn rgba(&self) -> Rgba<u8> {
        self.0
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Rgba<u8>> for BackgroundColor {
    fn from(rgba: Rgba<u8>) -> Self {
        Self(rgba)
    }
}

impl FromStr for BackgroundColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::MalformedColor(s.to_string()));
        }

        let mut channels = [255u8; 4];
        for (i, channel) in channels.iter_mut().enumerate().take(hex.len() / 2) {
            *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| Error::MalformedColor(s.to_string()))?;
        }
        Ok(Self(Rgba(channels)))
    }
}

impl TryFrom<String> for BackgroundColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<BackgroundColor> for String {
    fn from(color: BackgroundColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0 .0;
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}
