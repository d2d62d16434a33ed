use ratatui::Frame;

use crate::tui::components::reference::render_reference;
use crate::tui::components::target_row::{render_arrow, render_target_row};
use crate::tui::components::title::render_title;
use crate::tui::models::Dashboard;

/// 全UIコンポーネントを統制するメインレンダー関数
///
/// 毎フレーム空のバッファから描画し直すため、前フレームの表示は残らない
pub(crate) fn render(frame: &mut Frame, dashboard: &Dashboard) {
    let geometry = dashboard.geometry;
    let buf = frame.buffer_mut();

    render_title(buf, geometry, dashboard.banner);
    render_reference(buf, geometry);
    for (index, entry) in dashboard.targets.iter().enumerate() {
        // 画面に収まらない監視対象は描画しない
        if geometry.row_of(index) >= geometry.height {
            break;
        }
        render_target_row(buf, geometry, index, entry);
    }
    if let Some(index) = dashboard.arrow {
        render_arrow(buf, geometry, index);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::{Color, Modifier};

    use super::*;
    use crate::core::target::{ProbeOutcome, Target, TargetEntry};
    use crate::tui::layout::LayoutGeometry;

    const BANNER: &str = "From: monitor (192.0.2.10)";

    fn entry(name: &str, url: &str, port: &str, outcomes: &[ProbeOutcome]) -> TargetEntry {
        let mut entry = TargetEntry::new(Target::new(name, url, port), Duration::from_secs(5));
        for outcome in outcomes {
            entry.state.record_outcome(*outcome, 10);
        }
        entry
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn draw(
        width: u16,
        height: u16,
        targets: &[TargetEntry],
        arrow: Option<usize>,
    ) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let geometry =
            LayoutGeometry::compute(width, height, targets.iter().map(|entry| &entry.target));
        let dashboard = Dashboard {
            geometry: &geometry,
            banner: BANNER,
            targets,
            arrow,
        };
        terminal.draw(|frame| render(frame, &dashboard)).unwrap();
        terminal
    }

    #[test]
    fn test_render_title_and_reference() {
        // [正常系] タイトルと見出し
        let terminal = draw(80, 12, &[], None);
        let buffer = terminal.backend().buffer();

        let title = row_text(buffer, 0);
        assert_eq!(&title[36..43], "PORTMON");

        let banner = row_text(buffer, 1);
        assert!(banner[3..].starts_with(BANNER));
        let version = format!("[ver {}]   ", env!("CARGO_PKG_VERSION"));
        assert!(banner.ends_with(&version));

        assert!(row_text(buffer, 2)[3..].starts_with("Keys: (r)eset"));

        let reference = row_text(buffer, 4);
        assert_eq!(&reference[3..11], "HOSTNAME");
        assert_eq!(&reference[12..20], "URL:PORT");
        assert_eq!(&reference[26..44], " LOSS  SNT  RESULT");
        assert!(buffer[(3, 4)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_render_target_rows() {
        // [正常系] 監視対象ごとの行
        // URL列は"example.com80"の13文字に余白5文字を加えた18文字幅
        let targets = vec![
            entry(
                "web",
                "example.com",
                "80",
                &[
                    ProbeOutcome::Success,
                    ProbeOutcome::Failed,
                    ProbeOutcome::Timeout,
                ],
            ),
            entry("db", "10.0.0.5", "5432", &[ProbeOutcome::Success]),
        ];
        let terminal = draw(80, 12, &targets, None);
        let buffer = terminal.backend().buffer();

        let web = row_text(buffer, 5);
        assert_eq!(&web[0..3], "   ");
        assert_eq!(&web[3..6], "web");
        assert_eq!(&web[12..26], "example.com:80");
        assert_eq!(&web[31..43], "  66%    3  ");
        assert_eq!(&web[43..46], "tXO");
        assert_eq!(buffer[(43, 5)].fg, Color::Red);
        assert_eq!(buffer[(44, 5)].fg, Color::Red);
        assert_eq!(buffer[(45, 5)].fg, Color::Green);
        // 到達できていない監視対象は強調表示
        assert!(buffer[(3, 5)].modifier.contains(Modifier::BOLD));

        let db = row_text(buffer, 6);
        assert_eq!(&db[3..5], "db");
        assert_eq!(&db[12..25], "10.0.0.5:5432");
        assert_eq!(&db[31..43], "   0%    1  ");
        assert_eq!(&db[43..44], "O");
        assert!(!buffer[(3, 6)].modifier.contains(Modifier::BOLD));

        // 監視対象の後ろは空行
        assert_eq!(row_text(buffer, 7).trim(), "");
    }

    #[test]
    fn test_render_arrow() {
        // [正常系] 処理中の監視対象に矢印を表示
        let targets = vec![
            entry("web", "example.com", "80", &[]),
            entry("db", "10.0.0.5", "5432", &[]),
        ];
        let terminal = draw(80, 12, &targets, Some(1));
        let buffer = terminal.backend().buffer();
        assert!(row_text(buffer, 5).starts_with("   web"));
        assert!(row_text(buffer, 6).starts_with(" > db"));

        // [正常系] 一巡した後はリストの直後の行に表示
        let terminal = draw(80, 12, &targets, Some(2));
        let buffer = terminal.backend().buffer();
        assert!(row_text(buffer, 6).starts_with("   db"));
        assert_eq!(row_text(buffer, 7).trim_end(), " >");
    }

    #[test]
    fn test_render_truncates_long_name() {
        // [正常系] 名前は列幅で切り詰める
        let targets = vec![entry(
            "an-extremely-long-target-name",
            "example.com",
            "80",
            &[],
        )];
        let terminal = draw(100, 12, &targets, None);
        let buffer = terminal.backend().buffer();
        let row = row_text(buffer, 5);
        assert_eq!(&row[3..23], "an-extremely-long-ta");
        assert_eq!(&row[23..24], " ");
    }

    #[test]
    fn test_render_history_capacity() {
        // [正常系] 履歴は保持数を超えて描画しない
        let mut target = entry("web", "example.com", "80", &[]);
        for _ in 0..20 {
            target.state.record_outcome(ProbeOutcome::Success, 50);
        }
        let targets = vec![target];
        let terminal = draw(50, 8, &targets, None);
        let buffer = terminal.backend().buffer();
        let geometry = LayoutGeometry::compute(50, 8, targets.iter().map(|entry| &entry.target));
        let row = row_text(buffer, 5);
        let start = geometry.history_start as usize;
        let end = start + geometry.history_capacity();
        assert!(row[start..end].chars().all(|c| c == 'O'));
    }

    #[test]
    fn test_render_out_of_bounds() {
        // [異常系] 画面に収まらない描画は捨てられ、パニックしない
        let targets = vec![
            entry("web", "example.com", "80", &[ProbeOutcome::Success]),
            entry("db", "10.0.0.5", "5432", &[ProbeOutcome::Failed]),
        ];
        let terminal = draw(10, 3, &targets, Some(2));
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.area.width, 10);
        assert_eq!(buffer.area.height, 3);

        let terminal = draw(1, 1, &targets, Some(0));
        assert_eq!(terminal.backend().buffer().area.width, 1);
    }
}
