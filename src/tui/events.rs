use tokio::sync::mpsc;

use super::actions::*;
use super::*;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tracing::error;

impl App {
    /// Forward terminal input to the action channel until the app's token is
    /// cancelled. Resizes send `None` so the next frame is redrawn.
    pub fn handle_events(
        &self,
        tx: mpsc::UnboundedSender<Option<Action>>,
    ) -> tokio::task::JoinHandle<()> {
        let token = self.token.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                let event = tokio::select! {
                    _ = token.cancelled() => break,
                    event = reader.next() => event,
                };
                let action = match event {
                    Some(Ok(Event::Key(key))) => match handle_key_event(key) {
                        Some(action) => Some(action),
                        None => continue,
                    },
                    Some(Ok(Event::Resize(_, _))) => None,
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => {
                        error!(%err, "failed to read terminal event");
                        break;
                    }
                    None => break,
                };
                if tx.send(action).is_err() {
                    break;
                }
            }
        })
    }
}

fn handle_key_event(key: KeyEvent) -> Option<Action> {
    // crossterm also emits key release and repeat events on Windows.
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let plain = !ctrl && !key.modifiers.contains(KeyModifiers::ALT);
    let action = match key.code {
        KeyCode::Esc => Action::Exit,
        KeyCode::Char('c') if ctrl => Action::Exit,
        KeyCode::Char('n') if ctrl => Action::NewGame,

        // Navigation
        KeyCode::Right => Action::MoveRight,
        KeyCode::Left => Action::MoveLeft,
        KeyCode::Down => Action::MoveDown,
        KeyCode::Up => Action::MoveUp,
        KeyCode::Tab => Action::CycleFocus,
        KeyCode::Char(' ') => Action::Tap,

        // Placing and burying letters
        KeyCode::Enter => Action::Enter,
        KeyCode::Backspace => Action::Discard,
        KeyCode::Char('*') => Action::ClearAll,

        // Resizing the word
        KeyCode::Char('+') => Action::AppendLetter,
        KeyCode::Char('_') => Action::AppendSpace,
        KeyCode::Char('-') => Action::RemoveLast,

        KeyCode::Char(x) if plain && x.is_ascii_digit() => Action::EnterDigit(x.to_digit(10)?),
        KeyCode::Char(x) if plain && x.is_alphabetic() => Action::EnterChar(x),
        _ => return None,
    };
    Some(action)
}
