use std::io;

use log::info;
use thiserror::Error;
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::tui::models::Event;

#[derive(Debug, Error)]
pub(crate) enum ReloadError {
    #[error("Failed to register signal handler: {0}")]
    SignalRegistrationFailed(#[from] io::Error),
}

/// OSシグナルを監視し、スケジューラへ要求を送る
///
/// SIGHUPで設定ファイルの再読み込み、SIGINT/SIGTERMで終了を要求する
pub(crate) struct ReloadTrigger {
    task: JoinHandle<()>,
}

impl ReloadTrigger {
    /// シグナルハンドラを登録してから監視タスクを起動する
    pub(crate) fn spawn(
        token: CancellationToken,
        tx: mpsc::UnboundedSender<Event>,
    ) -> Result<Self, ReloadError> {
        let mut hangup = signal(SignalKind::hangup())?;
        let mut interrupt = signal(SignalKind::interrupt())?;
        let mut terminate = signal(SignalKind::terminate())?;

        let task = tokio::spawn(async move {
            loop {
                let event = tokio::select! {
                    _ = token.cancelled() => break,
                    Some(()) = hangup.recv() => {
                        info!("SIGHUP received, reloading targets...");
                        Event::Reload
                    }
                    Some(()) = interrupt.recv() => {
                        info!("SIGINT received, shutting down...");
                        Event::Quit
                    }
                    Some(()) = terminate.recv() => {
                        info!("SIGTERM received, shutting down...");
                        Event::Quit
                    }
                    else => break,
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        });
        Ok(Self { task })
    }
}

impl Drop for ReloadTrigger {
    fn drop(&mut self) {
        self.task.abort();
    }
}
