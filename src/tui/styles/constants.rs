/// 処理中の監視対象を示す矢印
pub const ARROW: &str = " > ";

/// タイトル部分の高さ(この行に見出しを表示し、次の行から監視対象を表示する)
pub const TITLE_HEIGHT: u16 = 4;

/// 列幅の上限
pub const MAX_NAME_WIDTH: u16 = 20;
pub const MAX_URL_WIDTH: u16 = 40;

/// URL列が上限に達していない場合に追加する余白
pub const URL_PADDING: u16 = 5;

/// 履歴表示の最小幅
pub const MIN_HISTORY_WIDTH: u16 = 10;

/// UIテキスト定数
pub const APP_TITLE: &str = "PORTMON";
pub const KEYS_TEXT: &str = "Keys: (r)eset  (q)uit";
pub const NAME_HEADER: &str = "HOSTNAME";
pub const URL_HEADER: &str = "URL:PORT";
/// 統計列の見出し(` LOSS  SNT`)の後ろに履歴列の見出しが続く
pub const STATS_HEADER: &str = " LOSS  SNT";
pub const HISTORY_HEADER: &str = "  RESULT";
