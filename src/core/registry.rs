use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io, mem};

use fxhash::FxHashMap;
use itertools::Itertools;
use log::info;
use thiserror::Error;

use crate::core::target::{Target, TargetEntry, TargetState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum RegistryError {
    #[error("can not open config file {0:?}. error: {1}")]
    ConfigUnavailable(PathBuf, io::ErrorKind),
}

/// 設定ファイルから監視対象を読み込み、実行中のリストと突き合わせる
#[derive(Debug, Clone)]
pub(crate) struct TargetRegistry {
    path: PathBuf,
    /// 新規に追加される監視対象のタイムアウト
    timeout: Duration,
}

impl TargetRegistry {
    pub(crate) fn new(path: impl AsRef<Path>, timeout: Duration) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            timeout,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// 設定ファイルに記述された監視対象を記述順に返す
    pub(crate) fn load(&self) -> Result<Vec<Target>, RegistryError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| RegistryError::ConfigUnavailable(self.path.clone(), e.kind()))?;
        Ok(parse_targets(&content))
    }

    /// 設定ファイルを読み直し、`running`を新しい監視対象リストで置き換える
    ///
    /// 読み込みに失敗した場合`running`は変更しない
    pub(crate) fn reconcile(&self, running: &mut Vec<TargetEntry>) -> Result<(), RegistryError> {
        let declared = self.load()?;
        let previous = mem::take(running);
        *running = merge(declared, previous, self.timeout);

        info!(
            "monitoring targets from {}: [{}]",
            self.path().display(),
            running.iter().map(|entry| &entry.target).join(", ")
        );
        Ok(())
    }
}

/// 宣言された監視対象に対し、同一の監視対象が既に存在すればその統計情報を引き継ぐ
///
/// 宣言から消えた監視対象の統計情報は破棄される
fn merge(
    declared: Vec<Target>,
    previous: Vec<TargetEntry>,
    timeout: Duration,
) -> Vec<TargetEntry> {
    let mut carried = previous
        .into_iter()
        .map(|entry| (entry.target, (entry.state, entry.timeout)))
        .collect::<FxHashMap<Target, (TargetState, Duration)>>();

    declared
        .into_iter()
        .map(|target| match carried.remove(&target) {
            Some((state, timeout)) => TargetEntry {
                target,
                state,
                timeout,
            },
            None => TargetEntry::new(target, timeout),
        })
        .collect()
}

/// 設定ファイルの内容を解析する
///
/// 1行に`name url port`を空白区切りで記述する。4つ目以降のフィールドは無視する
/// `#`で始まる行、空行、フィールドが3つに満たない行は読み飛ばす
pub(crate) fn parse_targets(content: &str) -> Vec<Target> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Target> {
    let normalized = line.split_whitespace().join(" ");
    if normalized.starts_with('#') {
        return None;
    }
    // 行内コメントの目印は取り除くだけで、それ以降のトークンは末尾の余分なフィールドとして扱う
    let normalized = normalized.replace("; #", " ").replace(";#", " ");

    let mut fields = normalized.split_whitespace();
    let name = fields.next()?;
    let url = fields.next()?;
    let port = fields.next()?;
    Some(Target::new(name, url, port))
}
