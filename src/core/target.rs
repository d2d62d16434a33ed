use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// 監視対象の識別情報
///
/// name, url, portの3つが全て一致する場合のみ同一の監視対象とみなす
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Target {
    /// 対象の表示名
    pub(crate) name: String,

    /// 対象のホスト名またはIPアドレス
    pub(crate) url: String,

    /// 対象のポート番号(設定ファイルの表記のまま保持する)
    pub(crate) port: String,
}

impl Target {
    pub(crate) fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            port: port.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.name, self.url, self.port)
    }
}

/// 1回のTCP接続試行の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProbeOutcome {
    Success,
    Failed,
    Timeout,
}

impl ProbeOutcome {
    /// 履歴表示用の文字
    pub(crate) const fn glyph(&self) -> char {
        match self {
            ProbeOutcome::Success => 'O',
            ProbeOutcome::Failed => 'X',
            ProbeOutcome::Timeout => 't',
        }
    }

    pub(crate) const fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success)
    }
}

/// 監視対象ごとの統計情報
///
/// 再読み込み時にはオブジェクトごと新しいリストへ移動させるため、Cloneは実装しない
#[derive(Debug, Default)]
pub(crate) struct TargetState {
    reachable: bool,
    sent: u64,
    loss: u64,
    loss_rate: f64,
    /// 新しい結果が先頭
    history: VecDeque<ProbeOutcome>,
}

impl TargetState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 接続結果を記録する
    ///
    /// `capacity`は現在の画面幅から求めた履歴の表示可能数で、超過分は古いものから捨てる
    pub(crate) fn record_outcome(&mut self, outcome: ProbeOutcome, capacity: usize) {
        self.sent += 1;
        if outcome.is_success() {
            self.reachable = true;
        } else {
            self.reachable = false;
            self.loss += 1;
        }
        self.loss_rate = 100.0 * self.loss as f64 / self.sent as f64;

        self.history.push_front(outcome);
        self.history.truncate(capacity);
    }

    pub(crate) fn reset(&mut self) {
        self.reachable = false;
        self.sent = 0;
        self.loss = 0;
        self.loss_rate = 0.0;
        self.history.clear();
    }

    pub(crate) fn reachable(&self) -> bool {
        self.reachable
    }

    pub(crate) fn sent(&self) -> u64 {
        self.sent
    }

    pub(crate) fn loss(&self) -> u64 {
        self.loss
    }

    pub(crate) fn loss_rate(&self) -> f64 {
        self.loss_rate
    }

    pub(crate) fn history(&self) -> impl Iterator<Item = ProbeOutcome> + '_ {
        self.history.iter().copied()
    }

    #[cfg(test)]
    pub(crate) fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// 実行中の監視対象リストの1要素
#[derive(Debug)]
pub(crate) struct TargetEntry {
    pub(crate) target: Target,
    pub(crate) state: TargetState,
    /// この監視対象に使用するタイムアウト
    pub(crate) timeout: Duration,
}

impl TargetEntry {
    pub(crate) fn new(target: Target, timeout: Duration) -> Self {
        Self {
            target,
            state: TargetState::new(),
            timeout,
        }
    }
}
