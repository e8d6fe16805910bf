use std::fmt;

/// One position of the word layout.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Slot {
    /// A placed uppercase letter
    Letter(char),
    /// An unfilled blank
    #[default]
    Empty,
    /// A word boundary, never fillable
    Space,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_space(&self) -> bool {
        matches!(self, Slot::Space)
    }

    /// Blanks are the slots that can hold a letter, filled or not.
    pub fn is_blank(&self) -> bool {
        !self.is_space()
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Slot::Letter(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the slot with any placed letter removed.
    /// Spaces stay spaces.
    pub fn cleared(self) -> Slot {
        match self {
            Slot::Space => Slot::Space,
            _ => Slot::Empty,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Letter(c) => write!(f, "{}", c),
            Slot::Empty => write!(f, "_"),
            Slot::Space => write!(f, " "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_keeps_spaces() {
        assert_eq!(Slot::Letter('A').cleared(), Slot::Empty);
        assert_eq!(Slot::Empty.cleared(), Slot::Empty);
        assert_eq!(Slot::Space.cleared(), Slot::Space);
    }

    #[test]
    fn blanks() {
        assert!(Slot::Letter('Ş').is_blank());
        assert!(Slot::Empty.is_blank());
        assert!(!Slot::Space.is_blank());
        assert_eq!(Slot::Letter('Ş').letter(), Some('Ş'));
        assert_eq!(Slot::Empty.letter(), None);
    }

    #[test]
    fn display() {
        let word: String = [Slot::Letter('O'), Slot::Empty, Slot::Space, Slot::Letter('K')]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(word, "O_ K");
    }
}
