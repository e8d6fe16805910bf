use super::*;

use sandbox_hangman::alphabet::{normalize, KEYBOARD_ROWS};
use sandbox_hangman::intent::Intent;
use tracing::{debug, info};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    Exit,
    MoveLeft,
    MoveRight,
    MoveDown,
    MoveUp,
    CycleFocus,
    /// Tap whatever is under the cursor
    Tap,
    Enter,
    EnterChar(char),
    EnterDigit(u32),
    Discard,
    ClearAll,
    AppendLetter,
    AppendSpace,
    RemoveLast,
    NewGame,
}

/// The area the arrow keys move in
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Focus {
    Word,
    Keyboard,
    Graveyard,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Word => Focus::Keyboard,
            Focus::Keyboard => Focus::Graveyard,
            Focus::Graveyard => Focus::Word,
        }
    }
}

impl App {
    pub fn update(&mut self, msg: Option<Action>) {
        if let Some(msg) = msg {
            debug!(?msg, "action");
            match self.game.phase() {
                Phase::Setup => self.update_setup(msg),
                Phase::Playing => self.update_playing(msg),
                Phase::Won | Phase::Lost => self.update_game_over(msg),
            }
        }
    }

    fn update_setup(&mut self, msg: Action) {
        match msg {
            Action::Exit => self.exit(),
            Action::MoveLeft | Action::MoveDown => {
                if self.setup_count > *SETUP_COUNT_RANGE.start() {
                    self.setup_count -= 1;
                }
            }
            Action::MoveRight | Action::MoveUp => {
                if self.setup_count < *SETUP_COUNT_RANGE.end() {
                    self.setup_count += 1;
                }
            }
            Action::EnterDigit(d) => self.enter_digit(d as usize),
            Action::Enter | Action::Tap => self.start_game(),
            _ => {}
        }
    }

    fn update_playing(&mut self, msg: Action) {
        let before = self.game.phase();
        match msg {
            Action::Exit => self.exit(),
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::CycleFocus => self.focus = self.focus.next(),
            Action::Tap => self.tap(),
            Action::Enter => self.apply(Intent::Confirm),
            Action::EnterChar(c) => self.arm_typed(c),
            Action::Discard => self.apply(Intent::Discard),
            Action::ClearAll => self.apply(Intent::ClearAll),
            Action::AppendLetter => self.apply(Intent::AppendLetter),
            Action::AppendSpace => self.apply(Intent::AppendSpace),
            Action::RemoveLast => self.apply(Intent::RemoveLast),
            Action::NewGame => self.apply(Intent::Reset),
            Action::EnterDigit(_) => {}
        }
        match self.game.phase() {
            Phase::Won if before != Phase::Won => {
                info!(word = %self.game.word(), wrong = self.game.wrong_count(), "game won")
            }
            Phase::Lost if before != Phase::Lost => {
                info!(word = %self.game.word(), "game lost")
            }
            _ => {}
        }
    }

    fn update_game_over(&mut self, msg: Action) {
        match msg {
            Action::Exit => self.exit(),
            Action::Enter | Action::NewGame => self.apply(Intent::Reset),
            _ => {}
        }
    }

    fn exit(&mut self) {
        self.token.cancel();
        self.exit = true;
    }

    fn apply(&mut self, intent: Intent) {
        self.game.apply(&intent);
        self.clamp_cursors();
    }

    pub(super) fn start_game(&mut self) {
        self.apply(Intent::Initialize(self.setup_count));
        self.focus = Focus::Word;
        self.slot_cursor = 0;
        self.grave_cursor = 0;
        info!(letters = self.setup_count, "game started");
    }

    /// Digits build up the letter count: `1` then `2` selects twelve.
    fn enter_digit(&mut self, digit: usize) {
        let combined = self.setup_count * 10 + digit;
        self.setup_count = if self.setup_count < 10 && SETUP_COUNT_RANGE.contains(&combined) {
            combined
        } else if SETUP_COUNT_RANGE.contains(&digit) {
            digit
        } else {
            self.setup_count
        };
    }

    fn tap(&mut self) {
        match self.focus {
            Focus::Word => self.apply(Intent::SelectSlot(self.slot_cursor)),
            Focus::Keyboard => {
                let (row, col) = self.key_cursor;
                self.apply(Intent::ArmLetter(KEYBOARD_ROWS[row][col]))
            }
            Focus::Graveyard => self.apply(Intent::RemoveFromGraveyard(self.grave_cursor)),
        }
    }

    fn arm_typed(&mut self, c: char) {
        if let Some(letter) = normalize(c) {
            self.apply(Intent::ArmLetter(letter));
            if let Some(pos) = key_position(letter) {
                self.key_cursor = pos;
            }
        }
    }

    fn move_right(&mut self) {
        match self.focus {
            Focus::Word => {
                let layout = self.game.layout();
                if let Some(i) = (self.slot_cursor + 1..layout.len()).find(|&i| layout[i].is_blank()) {
                    self.slot_cursor = i;
                }
            }
            Focus::Keyboard => {
                let (row, col) = self.key_cursor;
                if col + 1 < KEYBOARD_ROWS[row].len() {
                    self.key_cursor.1 += 1;
                }
            }
            Focus::Graveyard => {
                if self.grave_cursor + 1 < self.game.graveyard().len() {
                    self.grave_cursor += 1;
                }
            }
        }
    }

    fn move_left(&mut self) {
        match self.focus {
            Focus::Word => {
                let layout = self.game.layout();
                if let Some(i) = (0..self.slot_cursor).rev().find(|&i| layout[i].is_blank()) {
                    self.slot_cursor = i;
                }
            }
            Focus::Keyboard => {
                if self.key_cursor.1 > 0 {
                    self.key_cursor.1 -= 1;
                }
            }
            Focus::Graveyard => {
                if self.grave_cursor > 0 {
                    self.grave_cursor -= 1;
                }
            }
        }
    }

    fn move_down(&mut self) {
        if self.focus == Focus::Keyboard && self.key_cursor.0 < KEYBOARD_ROWS.len() - 1 {
            self.key_cursor.0 += 1;
            self.clamp_key_cursor();
        }
    }

    fn move_up(&mut self) {
        if self.focus == Focus::Keyboard && self.key_cursor.0 > 0 {
            self.key_cursor.0 -= 1;
            self.clamp_key_cursor();
        }
    }

    fn clamp_key_cursor(&mut self) {
        let (row, col) = self.key_cursor;
        self.key_cursor.1 = col.min(KEYBOARD_ROWS[row].len() - 1);
    }

    /// Keep the cursors inside the layout and the graveyard after they shrink.
    fn clamp_cursors(&mut self) {
        let layout = self.game.layout();
        if self.slot_cursor >= layout.len() {
            self.slot_cursor = layout.len().saturating_sub(1);
        }
        if layout.get(self.slot_cursor).is_some_and(|s| s.is_space()) {
            if let Some(i) = (0..self.slot_cursor).rev().find(|&i| layout[i].is_blank()) {
                self.slot_cursor = i;
            }
        }
        let graves = self.game.graveyard().len();
        if self.grave_cursor >= graves {
            self.grave_cursor = graves.saturating_sub(1);
        }
    }
}

fn key_position(letter: char) -> Option<(usize, usize)> {
    KEYBOARD_ROWS.iter().enumerate().find_map(|(row, keys)| {
        keys.iter()
            .position(|&k| k == letter)
            .map(|col| (row, col))
    })
}
