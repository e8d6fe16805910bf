//! The letters a player can arm, and the on-screen keyboard they sit on.

pub const NLETTER: usize = 32;

/// The 26 Latin letters followed by the Turkish-specific ones.
pub const ALPHABET: [char; NLETTER] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ğ', 'Ü', 'Ş', 'İ', 'Ö', 'Ç',
];

/// Turkish Q layout.
pub const KEYBOARD_ROWS: [&[char]; 3] = [
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', 'Ğ', 'Ü'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'Ş', 'İ'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M', 'Ö', 'Ç'],
];

/// Test if a character can be armed as it is.
///
/// # Example
///
/// ```
/// use sandbox_hangman::alphabet::is_armable;
/// assert!(is_armable('Ğ'));
/// assert!(!is_armable('a'));
/// assert!(!is_armable('7'));
/// ```
pub fn is_armable(c: char) -> bool {
    ALPHABET.contains(&c)
}

/// Maps a typed character to the letter it arms.
///
/// Lowercase input is upper-cased; the dotless `ı` maps to `I` and a plain
/// `i` maps to `I` as well, so `İ` is only reached by typing it directly or
/// from the on-screen keyboard.
///
/// # Example
///
/// ```
/// use sandbox_hangman::alphabet::normalize;
/// assert_eq!(normalize('a'), Some('A'));
/// assert_eq!(normalize('ş'), Some('Ş'));
/// assert_eq!(normalize('İ'), Some('İ'));
/// assert_eq!(normalize('-'), None);
/// ```
pub fn normalize(c: char) -> Option<char> {
    if is_armable(c) {
        return Some(c);
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if is_armable(u) => Some(u),
        _ => None,
    }
}
