use std::io::{self, Stderr};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind, MouseEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc;

pub type Tui = Terminal<CrosstermBackend<Stderr>>;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal size changed; the next draw picks up the new layout
    Resize,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

/// Consecutive read failures after which the terminal is treated as gone
const MAX_READ_ERRORS: u32 = 5;

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn event reader task
        tokio::spawn(forward_events(event::EventStream::new(), tx));

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Pump terminal events into the channel until the stream ends, the receiver
/// is dropped, or reads keep failing. Dropping `tx` closes the channel, which
/// ends the main loop.
async fn forward_events<S>(mut stream: S, tx: mpsc::UnboundedSender<AppEvent>)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let mut failures = 0;
    while let Some(evt) = stream.next().await {
        let evt = match evt {
            Ok(evt) => {
                failures = 0;
                evt
            }
            Err(e) => {
                failures += 1;
                tracing::warn!(error = %e, failures, "Terminal event read failed");
                if failures >= MAX_READ_ERRORS {
                    tracing::error!("Giving up on terminal input");
                    break;
                }
                continue;
            }
        };

        let app_event = match evt {
            Event::Key(key) => {
                // Only handle key press events, not release
                if key.kind == KeyEventKind::Press {
                    Some(AppEvent::Key(key))
                } else {
                    None
                }
            }
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(..) => Some(AppEvent::Resize),
            _ => None,
        };

        if let Some(event) = app_event {
            if tx.send(event).is_err() {
                break;
            }
        }
    }
}

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stderr(), EnterAlternateScreen)?;

    // Enable mouse capture for chat scrolling
    execute!(io::stderr(), crossterm::event::EnableMouseCapture)?;

    let backend = CrosstermBackend::new(io::stderr());
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stderr(), crossterm::event::DisableMouseCapture)?;
    execute!(io::stderr(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Install panic hook to restore terminal on panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
