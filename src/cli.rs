use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[clap(about = "Port Reachability Monitoring Tool", version)]
pub(crate) struct Cli {
    /// 監視対象を記述した設定ファイル
    pub(crate) config: PathBuf,

    /// 監視間隔などを記述したTOMLファイル
    #[clap(long, short)]
    pub(crate) settings: Option<PathBuf>,
}
impl Cli {
    pub(crate) fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
