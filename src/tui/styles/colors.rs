use ratatui::style::Color;

/// 接続結果の色
pub const SUCCESS_COLOR: Color = Color::Green;
pub const ERROR_COLOR: Color = Color::Red;
