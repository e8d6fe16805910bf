//! Sandbox hangman: the player chooses both the word and the guesses.
//!
//! [`game::GameState`] holds the rules. Front ends only read it and call its
//! operations, either directly or through [`intent::Intent`] values.

pub mod alphabet;
pub mod game;
pub mod intent;
