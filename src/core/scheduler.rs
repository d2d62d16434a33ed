use std::io;
use std::ops::ControlFlow;
use std::time::Duration;

use log::{debug, info, warn};
use ratatui::Terminal;
use ratatui::backend::Backend;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::config::Settings;
use crate::core::prober::Probe;
use crate::core::registry::TargetRegistry;
use crate::core::target::TargetEntry;
use crate::tui;
use crate::tui::layout::LayoutGeometry;
use crate::tui::models::Event;

#[derive(Debug, Error)]
pub(crate) enum SchedulerError {
    #[error("Failed to draw terminal: {0}")]
    Terminal(#[from] io::Error),
}

/// スケジューラの進行状況
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    /// `index`番目の監視対象を処理中
    Probing(usize),
    /// 全監視対象を一巡した後の待機中
    CycleSleep,
}

/// 監視対象リストとその描画先
///
/// 監視対象リストを変更するのはスケジューラのみで、外部からの要求はinboxを経由して受け取る
struct Board<B: Backend> {
    terminal: Terminal<B>,
    registry: TargetRegistry,
    targets: Vec<TargetEntry>,
    settings: Settings,
    banner: String,
    /// 直前に描画したフレームの配置
    geometry: LayoutGeometry,
    phase: Phase,
    /// 巡回中に受け取った再読み込み要求
    reload_pending: bool,
}

impl<B: Backend> Board<B> {
    fn arrow(&self) -> Option<usize> {
        match self.phase {
            Phase::Idle => None,
            Phase::Probing(index) => Some(index),
            Phase::CycleSleep => Some(self.targets.len()),
        }
    }

    fn draw(&mut self) -> Result<(), SchedulerError> {
        let arrow = self.arrow();
        self.geometry = tui::draw(&mut self.terminal, &self.banner, &self.targets, arrow)?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<ControlFlow<()>, SchedulerError> {
        match event {
            Event::Reset => {
                info!("Resetting statistics of all targets");
                for entry in &mut self.targets {
                    entry.state.reset();
                }
                self.draw()?;
            }
            Event::Reload => {
                // 巡回中はリストの長さを変えないよう次の巡回の開始時まで遅らせる
                if matches!(self.phase, Phase::Probing(_)) {
                    debug!("Reload requested during a cycle, deferring");
                    self.reload_pending = true;
                } else {
                    self.reload()?;
                }
            }
            Event::Resize => self.draw()?,
            Event::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn reload(&mut self) -> Result<(), SchedulerError> {
        self.reload_pending = false;
        if let Err(e) = self.registry.reconcile(&mut self.targets) {
            warn!("Keeping current targets: {e}");
        }
        self.draw()
    }
}

/// 監視対象を記述順に1つずつ確認し、結果を描画する
pub(crate) struct Scheduler<P: Probe, B: Backend> {
    prober: P,
    inbox: mpsc::UnboundedReceiver<Event>,
    board: Board<B>,
}

impl<P: Probe, B: Backend> Scheduler<P, B> {
    pub(crate) fn new(
        prober: P,
        terminal: Terminal<B>,
        registry: TargetRegistry,
        targets: Vec<TargetEntry>,
        settings: Settings,
        banner: String,
        inbox: mpsc::UnboundedReceiver<Event>,
    ) -> Self {
        Self {
            prober,
            inbox,
            board: Board {
                terminal,
                registry,
                targets,
                settings,
                banner,
                geometry: LayoutGeometry::default(),
                phase: Phase::Idle,
                reload_pending: false,
            },
        }
    }

    /// 終了が要求されるまで巡回を繰り返す
    pub(crate) async fn run(mut self) -> Result<(), SchedulerError> {
        info!(
            "Starting monitoring of {} targets",
            self.board.targets.len()
        );
        loop {
            if self.run_cycle().await?.is_break() {
                break;
            }
            if self.sleep_between_cycles().await?.is_break() {
                break;
            }
        }
        info!("Monitoring stopped");
        Ok(())
    }

    /// 全監視対象を記述順に1回ずつ確認する
    pub(crate) async fn run_cycle(&mut self) -> Result<ControlFlow<()>, SchedulerError> {
        if self.board.reload_pending {
            self.board.reload()?;
        }
        self.board.phase = Phase::Idle;
        self.board.draw()?;

        for index in 0..self.board.targets.len() {
            self.board.phase = Phase::Probing(index);
            self.board.draw()?;

            let entry = &self.board.targets[index];
            let target = entry.target.clone();
            let timeout = entry.timeout;

            // 接続を待つ間もリセットなどの要求は処理する
            let outcome = {
                let probe = self.prober.probe(&target.url, &target.port, timeout);
                tokio::pin!(probe);
                loop {
                    tokio::select! {
                        outcome = &mut probe => break outcome,
                        Some(event) = self.inbox.recv() => {
                            if self.board.handle_event(event)?.is_break() {
                                return Ok(ControlFlow::Break(()));
                            }
                        }
                    }
                }
            };
            debug!("{target}: {outcome:?}");

            let capacity = self.board.geometry.history_capacity();
            self.board.targets[index]
                .state
                .record_outcome(outcome, capacity);
            self.board.draw()?;

            let interval = self.board.settings.interval;
            if self.wait(interval).await?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }

        self.board.phase = Phase::CycleSleep;
        self.board.draw()?;
        Ok(ControlFlow::Continue(()))
    }

    async fn sleep_between_cycles(&mut self) -> Result<ControlFlow<()>, SchedulerError> {
        let cycle_interval = self.board.settings.cycle_interval;
        let flow = self.wait(cycle_interval).await?;
        self.board.phase = Phase::Idle;
        Ok(flow)
    }

    /// 要求を処理しながら`duration`だけ待機する
    async fn wait(&mut self, duration: Duration) -> Result<ControlFlow<()>, SchedulerError> {
        let deadline = sleep(duration);
        tokio::pin!(deadline);
        loop {
            tokio::select! {
                _ = &mut deadline => return Ok(ControlFlow::Continue(())),
                Some(event) = self.inbox.recv() => {
                    if self.board.handle_event(event)?.is_break() {
                        return Ok(ControlFlow::Break(()));
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn targets(&self) -> &[TargetEntry] {
        &self.board.targets
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.board.phase
    }
}
