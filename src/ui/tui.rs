use std::{
    ops::{Deref, DerefMut},
    time::Duration,
};

use color_eyre::eyre::Result;

use crossterm::event::EventStream;
use flume::{Receiver, Sender};
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
        Event as CrosstermEvent, KeyEvent, KeyEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend as Backend, crossterm};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Clone, Debug)]
pub enum TerminalEvent {
    Init,
    Quit,
    Tick,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Resize(u16, u16),
}

impl TerminalEvent {
    /// Key releases and repeats on terminals that report them are dropped,
    /// as is all mouse input.
    fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Some(TerminalEvent::Key(key))
            }
            CrosstermEvent::Key(_) | CrosstermEvent::Mouse(_) => None,
            CrosstermEvent::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            CrosstermEvent::FocusLost => Some(TerminalEvent::FocusLost),
            CrosstermEvent::FocusGained => Some(TerminalEvent::FocusGained),
            CrosstermEvent::Paste(text) => Some(TerminalEvent::Paste(text)),
        }
    }
}

pub struct Tui {
    pub terminal: ratatui::Terminal<Backend<std::io::Stdout>>,
    pub event_rx: Receiver<TerminalEvent>,
    event_tx: Sender<TerminalEvent>,
    reader: Option<JoinHandle<()>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::Terminal::new(Backend::new(std::io::stdout()))?;
        let (event_tx, event_rx) = flume::unbounded();

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            reader: None,
        })
    }

    /// Forwards terminal input and a steady tick until the receiver goes
    /// away or [`Tui::exit`] aborts the reader.
    fn start(&mut self) {
        let event_tx = self.event_tx.clone();
        let reader = tokio::spawn(async move {
            let mut stream = EventStream::new();
            let mut ticks = tokio::time::interval(TICK_RATE);
            loop {
                let event = tokio::select! {
                    _ = ticks.tick() => Some(TerminalEvent::Tick),
                    next = stream.next().fuse() => match next {
                        Some(Ok(event)) => TerminalEvent::from_crossterm(event),
                        Some(Err(e)) => {
                            warn!(error = %e, "terminal_read_failed");
                            None
                        }
                        None => Some(TerminalEvent::Quit),
                    },
                };

                if let Some(event) = event
                    && event_tx.send_async(event).await.is_err()
                {
                    break;
                }
            }
            debug!("terminal_reader_stopped");
        });

        if let Some(previous) = self.reader.replace(reader) {
            previous.abort();
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            EnableFocusChange,
            cursor::Hide
        )?;
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.flush()?;
            crossterm::execute!(std::io::stdout(), DisableBracketedPaste, DisableFocusChange)?;
            Self::restore()?;
        }
        Ok(())
    }

    pub fn restore() -> Result<()> {
        crossterm::execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        crossterm::terminal::disable_raw_mode()?;
        Ok(())
    }

    #[allow(clippy::should_implement_trait)]
    pub async fn next(&self) -> Option<TerminalEvent> {
        self.event_rx.recv_async().await.ok()
    }
}

impl Deref for Tui {
    type Target = ratatui::Terminal<Backend<std::io::Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            tracing::error!(error = %e, "terminal_restore_failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;

    #[test]
    fn only_key_presses_are_forwarded() {
        let press = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };

        assert!(matches!(
            TerminalEvent::from_crossterm(CrosstermEvent::Key(press)),
            Some(TerminalEvent::Key(_))
        ));
        assert!(TerminalEvent::from_crossterm(CrosstermEvent::Key(release)).is_none());
        assert!(matches!(
            TerminalEvent::from_crossterm(CrosstermEvent::Resize(80, 24)),
            Some(TerminalEvent::Resize(80, 24))
        ));
    }
}
