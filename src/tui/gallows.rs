use sandbox_hangman::game::MAX_WRONG_GUESSES;

/// Head, body, left arm, right arm, left leg, right leg.
const PARTS: [char; MAX_WRONG_GUESSES] = ['O', '|', '/', '\\', '/', '\\'];

/// The gallows with the first `wrong` body parts drawn.
pub fn figure(wrong: usize) -> Vec<String> {
    let part = |n: usize| if wrong > n { PARTS[n] } else { ' ' };
    vec![
        "  +---+  ".to_string(),
        "  |   |  ".to_string(),
        format!("  |   {}  ", part(0)),
        format!("  |  {}{}{} ", part(2), part(1), part(3)),
        format!("  |  {} {} ", part(4), part(5)),
        "  |      ".to_string(),
        "=========".to_string(),
    ]
}
