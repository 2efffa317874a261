use ratatui::style::Color;

pub const NEON_CYAN: Color = Color::Rgb(0x00, 0xf0, 0xff);
pub const NEON_MAGENTA: Color = Color::Rgb(0xff, 0x2b, 0xd6);
pub const ERROR_RED: Color = Color::Rgb(0xff, 0x4d, 0x6d);
pub const SUCCESS_GREEN: Color = Color::Rgb(0x3d, 0xdc, 0x84);

pub const DARK_BACKGROUND: Color = Color::Rgb(0x0d, 0x0d, 0x0d);
pub const DARK_SURFACE: Color = Color::Rgb(0x1a, 0x1a, 0x24);
pub const DARK_TEXT: Color = Color::Rgb(0xe6, 0xe6, 0xf0);
pub const DARK_TEXT_DIM: Color = Color::Rgb(0x80, 0x80, 0x90);
pub const DARK_INPUT_BORDER: Color = Color::Rgb(0x40, 0x40, 0x50);

pub const LIGHT_BACKGROUND: Color = Color::Rgb(0xf5, 0xf5, 0xfa);
pub const LIGHT_SURFACE: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const LIGHT_TEXT: Color = Color::Rgb(0x1a, 0x1a, 0x24);
pub const LIGHT_TEXT_DIM: Color = Color::Rgb(0x70, 0x70, 0x80);
pub const LIGHT_INPUT_BORDER: Color = Color::Rgb(0xb4, 0xb4, 0xc0);
pub const LIGHT_ACCENT: Color = Color::Rgb(0x00, 0x7a, 0xcc);

/// Linear mix of `from` towards `to`; `t` of 1.0 yields `to`.
/// Non-RGB colours snap at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
