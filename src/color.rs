//! Color palette and conversions.
//!
//! Hex strings are `RRGGBBAA` without a leading `#`, the layout rich-text
//! `<color>` tags expect.

use bevy::color::ColorToPacked;
use bevy::prelude::*;

use crate::error::ColorError;

/// Named colors beyond Bevy's basic set.
pub mod palette {
    use super::*;

    pub const BLACK: Color = Color::srgb(0.00, 0.00, 0.00);
    pub const BLUE: Color = Color::srgb(0.00, 0.00, 1.00);
    pub const BROWN: Color = Color::srgb(0.65, 0.16, 0.16);
    pub const CYAN: Color = Color::srgb(0.00, 1.00, 1.00);
    pub const DARK_BLUE: Color = Color::srgb(0.00, 0.00, 0.63);
    pub const GREEN: Color = Color::srgb(0.00, 0.50, 0.00);
    pub const GREY: Color = Color::srgb(0.50, 0.50, 0.50);
    pub const LIGHT_BLUE: Color = Color::srgb(0.68, 0.85, 0.90);
    pub const LIME: Color = Color::srgb(0.00, 1.00, 0.00);
    pub const MAGENTA: Color = Color::srgb(1.00, 0.00, 1.00);
    pub const MAROON: Color = Color::srgb(0.50, 0.00, 0.00);
    pub const NAVY: Color = Color::srgb(0.00, 0.00, 0.50);
    pub const OLIVE: Color = Color::srgb(0.50, 0.50, 0.00);
    pub const ORANGE: Color = Color::srgb(1.00, 0.65, 0.00);
    pub const PURPLE: Color = Color::srgb(0.50, 0.00, 0.50);
    pub const RED: Color = Color::srgb(1.00, 0.00, 0.00);
    pub const SILVER: Color = Color::srgb(0.75, 0.75, 0.75);
    pub const TEAL: Color = Color::srgb(0.00, 0.50, 0.50);
    pub const WHITE: Color = Color::srgb(1.00, 1.00, 1.00);
    pub const YELLOW: Color = Color::srgb(1.00, 1.00, 0.00);

    pub const AQUA: Color = CYAN;
    pub const FUCHSIA: Color = MAGENTA;
    pub const GRAY: Color = GREY;
}

/// `RRGGBBAA`, uppercase, no `#`.
pub fn color_to_hex(color: Color) -> String {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    format!("{r:02X}{g:02X}{b:02X}{a:02X}")
}

/// Parses `RGB`, `RGBA`, `RRGGBB` or `RRGGBBAA`, with or without `#`.
pub fn hex_to_color(hex: &str) -> Result<Color, ColorError> {
    Srgba::hex(hex)
        .map(Color::from)
        .map_err(|source| ColorError::InvalidHex {
            input: hex.to_string(),
            source,
        })
}

/// Same color with its alpha replaced.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    color.with_alpha(alpha)
}

/// Same color with its alpha replaced by a `0..=255` value.
pub fn with_alpha_u8(color: Color, alpha: u8) -> Color {
    with_alpha(color, f32::from(alpha) / 255.0)
}

/// Wraps `text` in a rich-text color tag, `hex` given without `#`.
pub fn rich_text_color(text: impl std::fmt::Display, hex: &str) -> String {
    format!("<color=#{hex}>{text}</color>")
}

/// Wraps `text` in a rich-text tag for `color`.
pub fn rich_text(text: impl std::fmt::Display, color: Color) -> String {
    rich_text_color(text, &color_to_hex(color))
}
