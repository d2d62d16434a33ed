use crate::core::target::TargetEntry;
use crate::tui::layout::LayoutGeometry;

/// スケジューラへ届けられる外部からの要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    /// 全監視対象の統計情報をリセット
    Reset,
    /// 設定ファイルの再読み込み
    Reload,
    /// 端末サイズの変更
    Resize,
    Quit,
}

/// 1フレーム分の描画内容
#[derive(Debug)]
pub(crate) struct Dashboard<'a> {
    pub(crate) geometry: &'a LayoutGeometry,
    pub(crate) banner: &'a str,
    pub(crate) targets: &'a [TargetEntry],
    /// 矢印を表示する監視対象のインデックス
    /// 監視対象数と等しい場合はリストの直後の行に表示する
    pub(crate) arrow: Option<usize>,
}
