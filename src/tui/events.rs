use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures::{FutureExt, StreamExt};
use log::warn;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::tui::models::Event;

/// 端末からのキー入力を監視し、スケジューラへ要求を送る
///
/// 入力待ちはこのタスク内でのみブロックし、監視処理を止めない
pub(crate) struct InputHandler {
    task: tokio::task::JoinHandle<()>,
}

impl InputHandler {
    pub(crate) fn spawn(token: CancellationToken, tx: mpsc::UnboundedSender<Event>) -> Self {
        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        break;
                    }
                    maybe_event = reader.next().fuse() => {
                        let event = match maybe_event {
                            Some(Ok(CrosstermEvent::Key(key))) => handle_key_event(key),
                            Some(Ok(CrosstermEvent::Resize(_, _))) => Some(Event::Resize),
                            Some(Ok(_)) => None,
                            Some(Err(e)) => {
                                warn!("Failed to read terminal event: {e}");
                                None
                            }
                            None => break,
                        };
                        // スケジューラが終了していれば受信側は閉じている
                        if let Some(event) = event {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });
        Self { task }
    }
}

impl Drop for InputHandler {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// キー入力を要求に変換する。対象外のキーは無視する
pub(crate) fn handle_key_event(key: KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        // Rawモードでは SIGINT が発生しないため Ctrl-C はここで扱う
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => Some(Event::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Event::Reset),
        KeyCode::Char('q') => Some(Event::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_handle_key_event() {
        // [正常系] リセット
        assert_eq!(
            handle_key_event(key(KeyCode::Char('r'), KeyModifiers::NONE)),
            Some(Event::Reset)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(Event::Reset)
        );

        // [正常系] 終了
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Event::Quit)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Event::Quit)
        );

        // [正常系] その他のキーは無視
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter, KeyModifiers::NONE)), None);
        assert_eq!(handle_key_event(key(KeyCode::Up, KeyModifiers::NONE)), None);

        // [正常系] キーを離したイベントは無視
        let release = KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
    }
}
