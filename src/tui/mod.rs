use std::io::{self, stdout, Stdout};

use sandbox_hangman::game::*;

use crossterm::{execute, terminal::*};
use ratatui::{backend::Backend, prelude::*};
use tokio::{sync::mpsc, task::JoinError, task::JoinHandle};
use tracing::{error, info};

use actions::{Action, Focus};
use tokio_util::sync::CancellationToken;

mod actions;
mod events;
mod gallows;
mod ui;

/// Letter count offered first on the setup screen
const DEFAULT_LETTER_COUNT: usize = 5;

/// A type alias for the terminal type used in this application
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Initialize the terminal
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct App {
    exit: bool,
    game: GameState,
    setup_count: usize,
    focus: Focus,
    slot_cursor: usize,
    key_cursor: (usize, usize),
    grave_cursor: usize,
    action_tx: mpsc::UnboundedSender<Option<Action>>,
    action_rx: mpsc::UnboundedReceiver<Option<Action>>,
    token: CancellationToken,
}

impl App {
    /// Create the app, skipping the setup screen when a letter count is given.
    pub fn init(letters: Option<usize>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let mut app = App {
            exit: false,
            game: GameState::new(),
            setup_count: DEFAULT_LETTER_COUNT,
            focus: Focus::Word,
            slot_cursor: 0,
            key_cursor: (0, 0),
            grave_cursor: 0,
            action_tx,
            action_rx,
            token: CancellationToken::new(),
        };
        if let Some(count) = letters {
            app.setup_count = count.clamp(*SETUP_COUNT_RANGE.start(), *SETUP_COUNT_RANGE.end());
            app.start_game();
        }
        app
    }

    /// runs the application's main loop until the user quits
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("session started");
        let input = self.handle_events(self.action_tx.clone());
        let result = self.event_loop(terminal, input).await;
        info!("session ended");
        result
    }

    /// Draw and apply actions until exit. Fails if the input task stops
    /// while the app is still running, since no key could end the loop.
    async fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut input: JoinHandle<()>,
    ) -> io::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.render_frame(frame))?;

            tokio::select! {
                biased;
                action = self.action_rx.recv() => {
                    if let Some(action) = action {
                        self.update(action);
                    }
                }
                joined = &mut input => {
                    self.token.cancel();
                    return Err(input_stopped(joined));
                }
            }
        }
        self.token.cancel();
        input.await.map_err(|err| {
            error!(%err, "input task failed");
            io::Error::other(err)
        })
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.size());
    }
}

fn input_stopped(joined: Result<(), JoinError>) -> io::Error {
    match joined {
        Ok(()) => {
            error!("terminal input closed");
            io::Error::new(io::ErrorKind::UnexpectedEof, "terminal input closed")
        }
        Err(err) => {
            error!(%err, "input task failed");
            io::Error::other(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use ratatui::backend::TestBackend;

    async fn drive(app: &mut App, input: JoinHandle<()>) -> io::Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(110, 44))?;
        tokio::time::timeout(Duration::from_secs(3), app.event_loop(&mut terminal, input))
            .await
            .expect("event loop did not return")
    }

    #[tokio::test]
    async fn returns_when_input_closes() {
        let mut app = App::init(Some(3));
        let err = drive(&mut app, tokio::spawn(async {})).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(app.token.is_cancelled());
    }

    #[tokio::test]
    async fn returns_when_input_panics() {
        let mut app = App::init(None);
        let input = tokio::spawn(async { panic!("no terminal attached") });
        let err = drive(&mut app, input).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[tokio::test]
    async fn exit_stops_input_and_returns() {
        let mut app = App::init(Some(3));
        let token = app.token.clone();
        let input = tokio::spawn(async move { token.cancelled().await });
        app.action_tx.send(Some(Action::Exit)).unwrap();
        drive(&mut app, input).await.unwrap();
        assert!(app.exit);
    }
}
