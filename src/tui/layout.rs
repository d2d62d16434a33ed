use crate::core::target::Target;
use crate::tui::styles::{
    ARROW, MAX_NAME_WIDTH, MAX_URL_WIDTH, MIN_HISTORY_WIDTH, NAME_HEADER, STATS_HEADER,
    TITLE_HEIGHT, URL_HEADER, URL_PADDING,
};

/// 列と列の間の空白
const COLUMN_GAP: u16 = 1;
/// 統計列と履歴列の間の空白
const HISTORY_GAP: u16 = 2;

/// 画面サイズと監視対象から求めた各列の配置
///
/// フレームごとに計算し直す。履歴の保持数もここで決まる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct LayoutGeometry {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) arrow_start: u16,
    pub(crate) arrow_width: u16,
    pub(crate) name_start: u16,
    pub(crate) name_width: u16,
    pub(crate) url_start: u16,
    pub(crate) url_width: u16,
    pub(crate) stats_start: u16,
    pub(crate) stats_width: u16,
    pub(crate) history_start: u16,
    pub(crate) history_capacity: u16,
}

impl LayoutGeometry {
    pub(crate) fn compute<'a>(
        width: u16,
        height: u16,
        targets: impl IntoIterator<Item = &'a Target>,
    ) -> Self {
        let arrow_start = 0;
        let arrow_width = text_width(ARROW);

        let (longest_name, longest_url) =
            targets
                .into_iter()
                .fold((0, 0), |(longest_name, longest_url), target| {
                    let url = text_width(&target.url).saturating_add(text_width(&target.port));
                    (
                        longest_name.max(text_width(&target.name)),
                        longest_url.max(url),
                    )
                });

        let name_start = arrow_start + arrow_width;
        let name_width = longest_name
            .max(text_width(NAME_HEADER))
            .min(MAX_NAME_WIDTH);

        let longest_url = longest_url.max(text_width(URL_HEADER));
        let url_start = name_start + name_width + COLUMN_GAP;
        let url_width = if longest_url > MAX_URL_WIDTH {
            MAX_URL_WIDTH
        } else {
            longest_url + URL_PADDING
        };

        let mut stats_start = url_start + url_width + COLUMN_GAP;
        let stats_width = text_width(STATS_HEADER);

        let mut history_start = stats_start + stats_width + HISTORY_GAP;
        let mut history_capacity = width.saturating_sub(history_start);

        // 履歴が最低限表示できるよう、統計列と履歴列を左に寄せる
        // 履歴列の開始位置が画面外にある場合はその分も含めて寄せる
        if history_start + MIN_HISTORY_WIDTH > width {
            let shift = (history_start + MIN_HISTORY_WIDTH).saturating_sub(width) + arrow_width;
            stats_start = stats_start.saturating_sub(shift);
            history_start = history_start.saturating_sub(shift);
            history_capacity = MIN_HISTORY_WIDTH;
        }

        Self {
            width,
            height,
            arrow_start,
            arrow_width,
            name_start,
            name_width,
            url_start,
            url_width,
            stats_start,
            stats_width,
            history_start,
            history_capacity,
        }
    }

    /// `index`番目の監視対象を表示する行
    pub(crate) fn row_of(&self, index: usize) -> u16 {
        let index = u16::try_from(index).unwrap_or(u16::MAX);
        TITLE_HEIGHT.saturating_add(1).saturating_add(index)
    }

    pub(crate) fn history_capacity(&self) -> usize {
        self.history_capacity as usize
    }
}

pub(crate) fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}
