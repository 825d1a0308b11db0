use ratatui::style::Color;

pub const PLAYER_ONE: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const PLAYER_TWO: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const EMPTY_CELL: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CURSOR: Color = Color::Cyan;
pub const WIN_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
