use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};

use crate::tui::components::put;
use crate::tui::layout::{LayoutGeometry, text_width};
use crate::tui::styles::{APP_TITLE, KEYS_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) fn render_title(buf: &mut Buffer, geometry: &LayoutGeometry, banner: &str) {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    // プログラム名は中央寄せ
    let title_padding = geometry.width.saturating_sub(text_width(APP_TITLE)) / 2;
    put(buf, title_padding, 0, APP_TITLE, bold);

    put(buf, geometry.name_start, 1, banner, bold);

    // バージョンは矢印の幅だけ右端を空けて右寄せ
    let version_text = format!("[ver {VERSION}]");
    let version_start = geometry
        .width
        .saturating_sub(geometry.arrow_width + text_width(&version_text));
    put(buf, version_start, 1, &version_text, bold);

    put(buf, geometry.arrow_width, 2, KEYS_TEXT, Style::default());
}
