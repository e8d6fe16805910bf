//! User intents as values.
//!
//! Every operation of [`GameState`] has one [`Intent`] variant, with a short
//! textual form so that games can be scripted:
//!
//! ```
//! use sandbox_hangman::{game::GameState, intent::parse_script};
//! let mut game = GameState::new();
//! for intent in parse_script("init 1; arm z; select 0; confirm").unwrap() {
//!     game.apply(&intent);
//! }
//! assert!(game.is_won());
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};

use crate::alphabet;
use crate::game::GameState;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Intent {
    Initialize(usize),
    SelectSlot(usize),
    ArmLetter(char),
    Confirm,
    Discard,
    RemoveFromGraveyard(usize),
    ClearAll,
    AppendLetter,
    AppendSpace,
    RemoveLast,
    Reset,
}

impl GameState {
    pub fn apply(&mut self, intent: &Intent) {
        match *intent {
            Intent::Initialize(count) => self.initialize(count),
            Intent::SelectSlot(index) => self.select_slot(index),
            Intent::ArmLetter(letter) => self.arm_letter(letter),
            Intent::Confirm => self.confirm(),
            Intent::Discard => self.discard(),
            Intent::RemoveFromGraveyard(position) => self.remove_from_graveyard(position),
            Intent::ClearAll => self.clear_all(),
            Intent::AppendLetter => self.append_letter(),
            Intent::AppendSpace => self.append_space(),
            Intent::RemoveLast => self.remove_last(),
            Intent::Reset => self.reset(),
        }
    }
}

fn parse_number(arg: Option<&str>, name: &str) -> Result<usize> {
    let arg = arg.ok_or_else(|| anyhow!("missing {name}"))?;
    arg.parse::<usize>()
        .with_context(|| format!("invalid {name} `{arg}`"))
}

fn parse_letter(arg: Option<&str>) -> Result<char> {
    let arg = arg.ok_or_else(|| anyhow!("missing letter"))?;
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            alphabet::normalize(c).ok_or_else(|| anyhow!("`{c}` is not an armable letter"))
        }
        _ => bail!("expected a single letter, got `{arg}`"),
    }
}

impl FromStr for Intent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let command = parts.next().ok_or_else(|| anyhow!("empty intent"))?;
        let arg = parts.next();

        let intent = match command.to_lowercase().as_str() {
            "init" | "initialize" => Intent::Initialize(parse_number(arg, "letter count")?),
            "select" => Intent::SelectSlot(parse_number(arg, "slot index")?),
            "arm" => Intent::ArmLetter(parse_letter(arg)?),
            "confirm" => Intent::Confirm,
            "discard" => Intent::Discard,
            "unbury" => Intent::RemoveFromGraveyard(parse_number(arg, "graveyard position")?),
            "clear" => Intent::ClearAll,
            "add-letter" | "+" => Intent::AppendLetter,
            "add-space" | "_" => Intent::AppendSpace,
            "remove-last" | "-" => Intent::RemoveLast,
            "reset" => Intent::Reset,
            other => bail!("unknown intent `{other}`"),
        };

        if let Some(extra) = parts.next() {
            bail!("unexpected argument `{extra}` in `{s}`");
        }
        let takes_arg = matches!(
            intent,
            Intent::Initialize(_)
                | Intent::SelectSlot(_)
                | Intent::ArmLetter(_)
                | Intent::RemoveFromGraveyard(_)
        );
        if !takes_arg && arg.is_some() {
            bail!("`{command}` takes no argument");
        }
        Ok(intent)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Initialize(count) => write!(f, "init {count}"),
            Intent::SelectSlot(index) => write!(f, "select {index}"),
            Intent::ArmLetter(letter) => write!(f, "arm {letter}"),
            Intent::Confirm => write!(f, "confirm"),
            Intent::Discard => write!(f, "discard"),
            Intent::RemoveFromGraveyard(position) => write!(f, "unbury {position}"),
            Intent::ClearAll => write!(f, "clear"),
            Intent::AppendLetter => write!(f, "add-letter"),
            Intent::AppendSpace => write!(f, "add-space"),
            Intent::RemoveLast => write!(f, "remove-last"),
            Intent::Reset => write!(f, "reset"),
        }
    }
}

/// Parse intents separated by `;` or newlines. Blank entries are skipped.
pub fn parse_script(script: &str) -> Result<Vec<Intent>> {
    script
        .split(|c| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, s)| {
            s.parse::<Intent>()
                .with_context(|| format!("intent #{} `{s}`", i + 1))
        })
        .collect()
}
