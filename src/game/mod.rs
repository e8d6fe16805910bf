pub mod slot;

use std::fmt;
use std::ops::RangeInclusive;

use colored::Colorize;
use tracing::{debug, trace};

use crate::alphabet;
pub use slot::Slot;

/// Number of discarded letters that completes the hangman.
pub const MAX_WRONG_GUESSES: usize = 6;
pub const MIN_LAYOUT_LEN: usize = 1;
pub const MAX_LAYOUT_LEN: usize = 20;
/// Letter counts offered when a game is set up.
pub const SETUP_COUNT_RANGE: RangeInclusive<usize> = 1..=15;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// No layout chosen yet
    Setup,
    Playing,
    Won,
    Lost,
}

/// The whole state of a sandbox hangman game.
///
/// Every operation is total: when its precondition does not hold it
/// leaves the state untouched.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct GameState {
    layout: Vec<Slot>,
    armed_letter: Option<char>,
    target_index: Option<usize>,
    graveyard: Vec<char>,
    in_game: bool,
}

impl GameState {
    /// Create a game in the setup phase
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a game with `count` empty blanks.
    ///
    /// # Example
    ///
    /// ```
    /// use sandbox_hangman::game::*;
    /// let mut game = GameState::new();
    /// game.initialize(5);
    /// assert_eq!(game.layout(), &[Slot::Empty; 5]);
    /// assert_eq!(game.phase(), Phase::Playing);
    /// ```
    pub fn initialize(&mut self, count: usize) {
        if !SETUP_COUNT_RANGE.contains(&count) {
            trace!(count, "letter count out of range");
            return;
        }
        self.layout = vec![Slot::Empty; count];
        self.armed_letter = None;
        self.target_index = None;
        self.graveyard.clear();
        self.in_game = true;
        debug!(count, "game initialized");
    }

    /// Tap a slot: unfill a letter, or toggle it as the target.
    pub fn select_slot(&mut self, index: usize) {
        if !self.in_game {
            return;
        }
        match self.layout.get(index) {
            None | Some(Slot::Space) => trace!(index, "slot not selectable"),
            Some(Slot::Letter(c)) => {
                debug!(index, letter = %c, "slot unfilled");
                self.layout[index] = Slot::Empty;
            }
            Some(Slot::Empty) => {
                if self.target_index == Some(index) {
                    self.target_index = None;
                    debug!(index, "target deselected");
                } else {
                    self.target_index = Some(index);
                    debug!(index, "target selected");
                }
            }
        }
    }

    /// Toggle the armed letter.
    ///
    /// # Example
    ///
    /// ```
    /// use sandbox_hangman::game::*;
    /// let mut game = GameState::new();
    /// game.initialize(3);
    /// game.arm_letter('K');
    /// assert_eq!(game.armed_letter(), Some('K'));
    /// game.arm_letter('K');
    /// assert_eq!(game.armed_letter(), None);
    /// ```
    pub fn arm_letter(&mut self, letter: char) {
        if !self.in_game {
            return;
        }
        if !alphabet::is_armable(letter) {
            trace!(%letter, "letter not in alphabet");
            return;
        }
        if self.graveyard.contains(&letter) {
            trace!(%letter, "letter is buried");
            return;
        }
        if self.armed_letter == Some(letter) {
            self.armed_letter = None;
            debug!(%letter, "letter disarmed");
        } else {
            self.armed_letter = Some(letter);
            debug!(%letter, "letter armed");
        }
    }

    /// Place the armed letter in the target slot.
    pub fn confirm(&mut self) {
        let (Some(letter), Some(index)) = (self.armed_letter, self.target_index) else {
            trace!("nothing to confirm");
            return;
        };
        // The target always refers to an empty slot in range
        self.layout[index] = Slot::Letter(letter);
        self.armed_letter = None;
        self.target_index = None;
        debug!(index, %letter, "letter placed");
    }

    /// Bury the armed letter. The target stays selected.
    pub fn discard(&mut self) {
        let Some(letter) = self.armed_letter.take() else {
            trace!("nothing to discard");
            return;
        };
        self.graveyard.push(letter);
        debug!(%letter, wrong = self.wrong_count(), "letter discarded");
    }

    /// Remove the graveyard entry at `position`, making that letter
    /// armable again.
    pub fn remove_from_graveyard(&mut self, position: usize) {
        if position >= self.graveyard.len() {
            trace!(position, "no graveyard entry");
            return;
        }
        let letter = self.graveyard.remove(position);
        debug!(position, %letter, "letter unburied");
    }

    /// Restart the guesses for the current word. The layout keeps its length
    /// and its spaces.
    pub fn clear_all(&mut self) {
        if !self.in_game {
            return;
        }
        for slot in self.layout.iter_mut() {
            *slot = slot.cleared();
        }
        self.graveyard.clear();
        self.armed_letter = None;
        self.target_index = None;
        debug!("board cleared");
    }

    pub fn append_letter(&mut self) {
        self.append(Slot::Empty)
    }

    pub fn append_space(&mut self) {
        self.append(Slot::Space)
    }

    fn append(&mut self, slot: Slot) {
        if !self.in_game || self.layout.len() >= MAX_LAYOUT_LEN {
            trace!(?slot, len = self.layout.len(), "layout is full");
            return;
        }
        self.layout.push(slot);
        debug!(?slot, len = self.layout.len(), "slot appended");
    }

    /// Drop the final slot, keeping at least one.
    pub fn remove_last(&mut self) {
        if !self.in_game || self.layout.len() <= MIN_LAYOUT_LEN {
            trace!(len = self.layout.len(), "layout at minimum");
            return;
        }
        self.layout.pop();
        let removed = self.layout.len();
        if self.target_index == Some(removed) {
            self.target_index = None;
        }
        debug!(len = self.layout.len(), "last slot removed");
    }

    /// Return to the setup phase
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    pub fn layout(&self) -> &[Slot] {
        &self.layout
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.layout.get(index).copied()
    }

    pub fn armed_letter(&self) -> Option<char> {
        self.armed_letter
    }

    pub fn target_index(&self) -> Option<usize> {
        self.target_index
    }

    /// Buried letters in the order they were discarded
    pub fn graveyard(&self) -> &[char] {
        &self.graveyard
    }

    pub fn is_buried(&self, letter: char) -> bool {
        self.graveyard.contains(&letter)
    }

    pub fn wrong_count(&self) -> usize {
        self.graveyard.len()
    }

    pub fn is_in_game(&self) -> bool {
        self.in_game
    }

    pub fn is_lost(&self) -> bool {
        self.wrong_count() >= MAX_WRONG_GUESSES
    }

    /// The game is won once no blank is left unfilled.
    pub fn is_won(&self) -> bool {
        !self.layout.is_empty() && !self.layout.iter().any(Slot::is_empty)
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    pub fn phase(&self) -> Phase {
        if !self.in_game {
            Phase::Setup
        } else if self.is_won() {
            Phase::Won
        } else if self.is_lost() {
            Phase::Lost
        } else {
            Phase::Playing
        }
    }

    /// Number of blanks holding a letter
    pub fn filled_count(&self) -> usize {
        self.layout.iter().filter(|s| s.letter().is_some()).count()
    }

    /// Number of blanks, filled or not
    pub fn blank_count(&self) -> usize {
        self.layout.iter().filter(|s| s.is_blank()).count()
    }

    /// The layout as plain text: letters, `_` for empty blanks and a space
    /// for word boundaries.
    pub fn word(&self) -> String {
        self.layout.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.layout.iter().enumerate() {
            let text = format!(" {} ", slot);
            match slot {
                _ if self.target_index == Some(i) => write!(f, "{}", text.on_blue())?,
                Slot::Letter(_) => write!(f, "{}", text.on_green().bold())?,
                Slot::Empty => write!(f, "{}", text.on_black())?,
                Slot::Space => write!(f, "{}", text)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(count: usize) -> GameState {
        let mut game = GameState::new();
        game.initialize(count);
        game
    }

    #[test]
    fn initialize_clears_everything() {
        let mut game = playing(3);
        game.arm_letter('A');
        game.discard();
        game.arm_letter('B');
        game.select_slot(1);

        game.initialize(4);
        assert_eq!(game.layout(), &[Slot::Empty; 4]);
        assert_eq!(game.armed_letter(), None);
        assert_eq!(game.target_index(), None);
        assert!(game.graveyard().is_empty());
    }

    #[test]
    fn initialize_out_of_range() {
        let mut game = GameState::new();
        game.initialize(0);
        assert_eq!(game.phase(), Phase::Setup);
        game.initialize(16);
        assert_eq!(game.phase(), Phase::Setup);
        game.initialize(15);
        assert_eq!(game.layout().len(), 15);
    }

    #[test]
    fn setup_ignores_play_operations() {
        let mut game = GameState::new();
        game.append_letter();
        game.append_space();
        game.arm_letter('A');
        game.select_slot(0);
        game.clear_all();
        assert_eq!(game, GameState::new());
        assert!(!game.is_won());
        assert_eq!(game.phase(), Phase::Setup);
    }

    #[test]
    fn select_toggles_target() {
        let mut game = playing(3);
        game.select_slot(1);
        assert_eq!(game.target_index(), Some(1));
        game.select_slot(2);
        assert_eq!(game.target_index(), Some(2));
        game.select_slot(2);
        assert_eq!(game.target_index(), None);
        game.select_slot(7);
        assert_eq!(game.target_index(), None);
    }

    #[test]
    fn select_filled_slot_unfills_it() {
        let mut game = playing(3);
        game.arm_letter('E');
        game.select_slot(0);
        game.confirm();
        game.select_slot(2);

        game.select_slot(0);
        assert_eq!(game.slot(0), Some(Slot::Empty));
        assert_eq!(game.target_index(), Some(2));
    }

    #[test]
    fn arm_replaces_and_toggles() {
        let mut game = playing(2);
        game.arm_letter('A');
        game.arm_letter('Ç');
        assert_eq!(game.armed_letter(), Some('Ç'));
        game.arm_letter('Ç');
        assert_eq!(game.armed_letter(), None);
        game.arm_letter('a');
        assert_eq!(game.armed_letter(), None);
    }

    #[test]
    fn buried_letter_cannot_be_armed() {
        let mut game = playing(2);
        game.arm_letter('X');
        game.discard();
        game.arm_letter('X');
        assert_eq!(game.armed_letter(), None);
        assert!(game.is_buried('X'));
    }

    #[test]
    fn confirm_needs_both_selections() {
        let mut game = playing(2);
        game.arm_letter('A');
        let before = game.clone();
        game.confirm();
        assert_eq!(game, before);

        game.arm_letter('A');
        game.select_slot(0);
        let before = game.clone();
        game.confirm();
        assert_eq!(game, before);
    }

    #[test]
    fn discard_keeps_target() {
        let mut game = playing(4);
        game.select_slot(3);
        game.arm_letter('Q');
        game.discard();
        assert_eq!(game.graveyard(), &['Q']);
        assert_eq!(game.armed_letter(), None);
        assert_eq!(game.target_index(), Some(3));

        let before = game.clone();
        game.discard();
        assert_eq!(game, before);
    }

    #[test]
    fn unbury_by_position() {
        let mut game = playing(1);
        for c in ['A', 'B', 'C'] {
            game.arm_letter(c);
            game.discard();
        }
        game.remove_from_graveyard(1);
        assert_eq!(game.graveyard(), &['A', 'C']);
        game.remove_from_graveyard(2);
        assert_eq!(game.graveyard(), &['A', 'C']);
        game.arm_letter('B');
        assert_eq!(game.armed_letter(), Some('B'));
    }

    #[test]
    fn clear_all_keeps_spaces_and_length() {
        let mut game = playing(2);
        game.append_space();
        game.append_letter();
        game.arm_letter('O');
        game.select_slot(0);
        game.confirm();
        game.arm_letter('N');
        game.discard();
        game.select_slot(3);
        game.arm_letter('K');

        game.clear_all();
        assert_eq!(
            game.layout(),
            &[Slot::Empty, Slot::Empty, Slot::Space, Slot::Empty]
        );
        assert!(game.graveyard().is_empty());
        assert_eq!(game.armed_letter(), None);
        assert_eq!(game.target_index(), None);
    }

    #[test]
    fn append_stops_at_max() {
        let mut game = playing(15);
        for _ in 0..10 {
            game.append_space();
        }
        assert_eq!(game.layout().len(), MAX_LAYOUT_LEN);
        game.append_letter();
        assert_eq!(game.layout().len(), MAX_LAYOUT_LEN);
    }

    #[test]
    fn remove_last_clears_dangling_target() {
        let mut game = playing(3);
        game.select_slot(2);
        game.remove_last();
        assert_eq!(game.layout().len(), 2);
        assert_eq!(game.target_index(), None);

        game.select_slot(0);
        game.remove_last();
        assert_eq!(game.target_index(), Some(0));
        game.remove_last();
        assert_eq!(game.layout().len(), 1);
        assert_eq!(game.target_index(), Some(0));
    }

    #[test]
    fn spaces_count_as_filled() {
        let mut game = playing(1);
        game.append_space();
        game.arm_letter('Z');
        game.select_slot(0);
        game.confirm();
        assert!(game.is_won());
        assert_eq!(game.word(), "Z ");
        assert_eq!(game.filled_count(), 1);
        assert_eq!(game.blank_count(), 1);
    }

    #[test]
    fn won_wins_over_lost() {
        let mut game = playing(1);
        for c in ['A', 'B', 'C', 'D', 'E', 'F'] {
            game.arm_letter(c);
            game.discard();
        }
        assert_eq!(game.phase(), Phase::Lost);
        game.arm_letter('G');
        game.select_slot(0);
        game.confirm();
        assert!(game.is_lost());
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn reset_returns_to_setup() {
        let mut game = playing(5);
        game.arm_letter('A');
        game.discard();
        game.reset();
        assert_eq!(game, GameState::new());
        assert_eq!(game.phase(), Phase::Setup);
    }
}
