// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use displaydoc::Display;
use thiserror::Error;

/// An sRGB color with alpha, as carried in message payloads.
///
/// Payloads encode colors as `#RRGGBB` or `#AARRGGBB` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Formats the color as `#AARRGGBB`.
    pub fn to_hex_string(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.alpha, self.red, self.green, self.blue
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or(ColorParseError::MissingPrefix)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit);
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::InvalidLength);
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::InvalidDigit)?;
        let [a, r, g, b] = value.to_be_bytes();
        if hex.len() == 6 {
            Ok(Self::rgb(r, g, b))
        } else {
            Ok(Self::rgba(r, g, b, a))
        }
    }
}

#[derive(Debug, Error, Display, PartialEq, Eq)]
pub enum ColorParseError {
    /// Color string does not start with `#`
    MissingPrefix,
    /// Color string contains a non-hex digit
    InvalidDigit,
    /// Color string must have 6 or 8 hex digits
    InvalidLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb() {
        assert_eq!("#FF8000".parse(), Ok(Color::rgb(0xFF, 0x80, 0x00)));
        assert_eq!("#ff8000".parse(), Ok(Color::rgb(0xFF, 0x80, 0x00)));
    }

    #[test]
    fn parse_argb() {
        assert_eq!("#80FF0000".parse(), Ok(Color::rgba(0xFF, 0x00, 0x00, 0x80)));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            "FF8000".parse::<Color>(),
            Err(ColorParseError::MissingPrefix)
        );
        assert_eq!(
            "#GG8000".parse::<Color>(),
            Err(ColorParseError::InvalidDigit)
        );
        assert_eq!(
            "#+F8000".parse::<Color>(),
            Err(ColorParseError::InvalidDigit)
        );
        assert_eq!("#F80".parse::<Color>(), Err(ColorParseError::InvalidLength));
        assert_eq!("#".parse::<Color>(), Err(ColorParseError::InvalidLength));
    }

    #[test]
    fn hex_string_is_argb() {
        let color = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_hex_string(), "#78123456");
        assert_eq!(color.to_hex_string().parse(), Ok(color));
    }
}
