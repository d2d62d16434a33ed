use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};

use crate::core::target::{TargetEntry, TargetState};
use crate::tui::components::put;
use crate::tui::layout::LayoutGeometry;
use crate::tui::styles::{ARROW, ERROR_COLOR, SUCCESS_COLOR};

/// ロス率と送信数をフォーマット
fn format_stats(state: &TargetState) -> String {
    format!(" {:>3}% {:>4}  ", state.loss_rate() as u64, state.sent())
}

/// 先頭から`width`文字までを切り出す
fn truncate(text: &str, width: u16) -> String {
    text.chars().take(width as usize).collect()
}

/// `index`番目の監視対象の行を描画する
pub(crate) fn render_target_row(
    buf: &mut Buffer,
    geometry: &LayoutGeometry,
    index: usize,
    entry: &TargetEntry,
) {
    let row = geometry.row_of(index);
    let state = &entry.state;
    // 到達できていない監視対象は強調表示
    let line_style = if state.reachable() {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let name = truncate(&entry.target.name, geometry.name_width);
    put(buf, geometry.name_start, row, &name, line_style);

    let url = format!("{}:{}", entry.target.url, entry.target.port);
    let url = truncate(&url, geometry.url_width);
    put(buf, geometry.url_start, row, &url, line_style);

    put(buf, geometry.stats_start, row, &format_stats(state), line_style);

    for (offset, outcome) in state
        .history()
        .take(geometry.history_capacity())
        .enumerate()
    {
        let color = if outcome.is_success() {
            SUCCESS_COLOR
        } else {
            ERROR_COLOR
        };
        let x = geometry.history_start.saturating_add(offset as u16);
        put(
            buf,
            x,
            row,
            &outcome.glyph().to_string(),
            Style::default().fg(color),
        );
    }
}

/// 処理中の監視対象を示す矢印を描画する
pub(crate) fn render_arrow(buf: &mut Buffer, geometry: &LayoutGeometry, index: usize) {
    put(
        buf,
        geometry.arrow_start,
        geometry.row_of(index),
        ARROW,
        Style::default(),
    );
}
