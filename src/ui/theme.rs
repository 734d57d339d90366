use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x4f, 0x46, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACCEPTED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const SELECTED_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
