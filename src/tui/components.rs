use ratatui::buffer::Buffer;
use ratatui::style::Style;

pub(crate) mod reference;
pub(crate) mod target_row;
pub(crate) mod title;

/// 指定位置に文字列を描画する
///
/// 端末サイズの変更と配置計算がずれることがあるため、画面外への描画は何もせずに捨てる
pub(crate) fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    let area = buf.area;
    if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
        return;
    }
    let max_width = (area.right() - x) as usize;
    buf.set_stringn(x, y, text, max_width, style);
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::*;

    #[test]
    fn test_put() {
        // [正常系] 画面内への描画
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        put(&mut buf, 2, 1, "abc", Style::default());
        assert_eq!(buf[(2, 1)].symbol(), "a");
        assert_eq!(buf[(4, 1)].symbol(), "c");

        // [正常系] 右端を超える部分は切り詰められる
        put(&mut buf, 8, 0, "xyz", Style::default());
        assert_eq!(buf[(8, 0)].symbol(), "x");
        assert_eq!(buf[(9, 0)].symbol(), "y");

        // [異常系] 画面外への描画は無視される
        put(&mut buf, 10, 0, "out", Style::default());
        put(&mut buf, 0, 2, "out", Style::default());
        put(&mut buf, u16::MAX, u16::MAX, "out", Style::default());
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
