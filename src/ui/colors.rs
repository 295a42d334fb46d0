use ratatui::style::Color;

/// Common colors
pub const GRAY_COLOR: Color = Color::Indexed(237);
pub const WHITE_COLOR: Color = Color::White;

// Footer
pub const FOOTER_BG: Color = GRAY_COLOR;

// Card view
pub const CARD_BORDER_FG: Color = Color::Indexed(245);
pub const CARD_BACK_FG: Color = Color::Yellow;
pub const TAG_FG: Color = Color::Cyan;
pub const HINT_FG: Color = Color::DarkGray;
pub const HINT_DISABLED_FG: Color = Color::Indexed(236);

// Messages
pub const MESSAGE_ERROR_FG: Color = Color::Red;
