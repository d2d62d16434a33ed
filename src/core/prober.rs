use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::core::target::ProbeOutcome;

/// 監視対象への到達性を確認する
#[async_trait]
pub(crate) trait Probe: Send + Sync {
    async fn probe(&self, url: &str, port: &str, timeout: Duration) -> ProbeOutcome;
}

/// TCPのコネクション確立可否で到達性を確認する
///
/// 接続は毎回新規に張り、確立できた時点で切断する
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TcpProber;

#[async_trait]
impl Probe for TcpProber {
    async fn probe(&self, url: &str, port: &str, timeout_duration: Duration) -> ProbeOutcome {
        let port = match port.parse::<u16>() {
            Ok(port) => port,
            Err(e) => {
                debug!("Invalid port number {port:?} for {url}: {e}");
                return ProbeOutcome::Failed;
            }
        };

        // 名前解決もタイムアウトに含める
        match timeout(timeout_duration, TcpStream::connect((url, port))).await {
            // ストリームはここでdropされソケットが閉じられる
            Ok(Ok(_stream)) => ProbeOutcome::Success,
            Ok(Err(e)) => {
                debug!("Failed to connect to {url}:{port}: {e}");
                ProbeOutcome::Failed
            }
            Err(_) => {
                debug!("Connection to {url}:{port} timed out");
                ProbeOutcome::Timeout
            }
        }
    }
}
