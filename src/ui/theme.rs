use ratatui::style::Color;

pub const BRAND_ORANGE: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PRICE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const RATING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
