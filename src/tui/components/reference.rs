use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};

use crate::tui::components::put;
use crate::tui::layout::LayoutGeometry;
use crate::tui::styles::{HISTORY_HEADER, NAME_HEADER, STATS_HEADER, TITLE_HEIGHT, URL_HEADER};

/// 各列の見出しを描画する
pub(crate) fn render_reference(buf: &mut Buffer, geometry: &LayoutGeometry) {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    put(buf, geometry.name_start, TITLE_HEIGHT, NAME_HEADER, bold);
    put(buf, geometry.url_start, TITLE_HEIGHT, URL_HEADER, bold);
    put(buf, geometry.stats_start, TITLE_HEIGHT, STATS_HEADER, bold);
    put(
        buf,
        geometry.stats_start + geometry.stats_width,
        TITLE_HEIGHT,
        HISTORY_HEADER,
        bold,
    );
}
