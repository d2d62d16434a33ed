use std::net::IpAddr;
use std::time::Duration;

use log::warn;
use nix::unistd::gethostname;
use tokio::net::lookup_host;
use tokio::time::timeout;

/// 名前解決を待つ最大時間
const RESOLVE_TIMEOUT: Duration = Duration::from_secs(1);

/// タイトルに表示する監視元ホストの情報を取得する
pub(crate) async fn host_banner() -> String {
    let hostname = match gethostname() {
        Ok(hostname) => hostname.to_string_lossy().into_owned(),
        Err(e) => {
            warn!("Failed to get hostname: {e}");
            return format_banner("unknown", None);
        }
    };

    let address = match timeout(RESOLVE_TIMEOUT, lookup_host((hostname.as_str(), 0))).await {
        Ok(Ok(mut addrs)) => addrs.find(|addr| addr.is_ipv4()).map(|addr| addr.ip()),
        Ok(Err(e)) => {
            warn!("Failed to resolve {hostname}: {e}");
            None
        }
        Err(_) => {
            warn!("Resolving {hostname} timed out");
            None
        }
    };
    format_banner(&hostname, address)
}

fn format_banner(hostname: &str, address: Option<IpAddr>) -> String {
    match address {
        Some(address) => format!("From: {hostname} ({address})"),
        None => format!("From: {hostname}"),
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    #[test]
    fn test_format_banner() {
        // [正常系] アドレスが解決できた場合
        let address = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10));
        assert_eq!(
            format_banner("monitor", Some(address)),
            "From: monitor (192.0.2.10)"
        );

        // [正常系] アドレスが解決できなかった場合
        assert_eq!(format_banner("monitor", None), "From: monitor");
    }

    #[tokio::test]
    async fn test_host_banner() {
        // [正常系] 自ホスト名が含まれる
        let banner = host_banner().await;
        assert!(banner.starts_with("From: "));
        let hostname = gethostname().unwrap();
        assert!(banner.contains(hostname.to_string_lossy().as_ref()));
    }
}
