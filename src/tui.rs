use std::io;

use layout::LayoutGeometry;
use models::Dashboard;
use ratatui::Terminal;
use ratatui::backend::Backend;
use renderer::render;

use crate::core::target::TargetEntry;

pub(crate) mod components;
pub(crate) mod events;
pub(crate) mod layout;
pub(crate) mod models;
pub(crate) mod renderer;
pub(crate) mod styles;

/// 現在の端末サイズで配置を計算し直して1フレーム描画する
///
/// 描画に使用した配置を返す
pub(crate) fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    banner: &str,
    targets: &[TargetEntry],
    arrow: Option<usize>,
) -> io::Result<LayoutGeometry> {
    let mut geometry = LayoutGeometry::default();
    terminal.draw(|frame| {
        let area = frame.area();
        geometry = LayoutGeometry::compute(
            area.width,
            area.height,
            targets.iter().map(|entry| &entry.target),
        );
        let dashboard = Dashboard {
            geometry: &geometry,
            banner,
            targets,
            arrow,
        };
        render(frame, &dashboard);
    })?;
    Ok(geometry)
}
