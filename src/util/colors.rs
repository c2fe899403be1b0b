use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x001db954);
pub const SECONDARY: Color = Color::from_u32(0x00168d40);
pub const NEUTRAL: Color = Color::from_u32(0x00535353);
pub const BACKGROUND: Color = Color::from_u32(0x00121212);
pub const SURFACE: Color = Color::from_u32(0x00181818);
pub const TEXT: Color = Color::from_u32(0x00ffffff);
pub const MUTED: Color = Color::from_u32(0x00b3b3b3);
pub const ERROR: Color = Color::from_u32(0x00f15e6c);

/// Parses a `#rrggbb` hint.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(Color::from_u32)
}

pub fn hint_or(hint: Option<&str>, fallback: Color) -> Color {
    hint.and_then(parse_hex).unwrap_or(fallback)
}
