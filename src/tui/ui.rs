use super::{actions::Focus, gallows, App};
use ratatui::{
    prelude::*,
    widgets::{block::*, *},
};
use sandbox_hangman::{
    alphabet::KEYBOARD_ROWS,
    game::{Phase, Slot, MAX_LAYOUT_LEN, MAX_WRONG_GUESSES, MIN_LAYOUT_LEN, SETUP_COUNT_RANGE},
};

const BOX_WIDTH: u16 = 5;
const SPACE_WIDTH: u16 = 3;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = self.create_border();
        let inner = border.inner(area);
        border.render(area, buf);

        match self.game.phase() {
            Phase::Setup => self.render_setup(inner, buf),
            Phase::Playing => self.render_game(inner, buf),
            Phase::Won | Phase::Lost => {
                self.render_game(inner, buf);
                self.render_game_over(inner, buf);
            }
        }
    }
}

/// A box for a single letter, doubled when the cursor is on it.
fn letter_box(text: String, cursor: bool, border_style: Style, text_style: Style) -> Paragraph<'static> {
    let block = match cursor {
        true => Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(border_style),
        false => Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    };
    Paragraph::new(Text::styled(text, text_style))
        .bold()
        .centered()
        .block(block)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(height)])
        .flex(layout::Flex::Center)
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(width)])
        .flex(layout::Flex::Center)
        .split(rows[0])[0]
}

fn key_hint<'a>(key: &'a str, label: &'a str, enabled: bool) -> Vec<Span<'a>> {
    if enabled {
        vec![format!(" {key} ").blue().bold(), label.into()]
    } else {
        vec![format!(" {key} ").dark_gray(), label.dark_gray()]
    }
}

impl App {
    fn create_border(&self) -> Block<'_> {
        let title = Title::from(" Sandbox Hangman ".bold());
        let instructions = Title::from(Line::from(vec![
            " Quit ".into(),
            "<Esc> ".blue().bold(),
            " Focus ".into(),
            "<Tab> ".blue().bold(),
            " Tap ".into(),
            "<Space> ".blue().bold(),
        ]));
        Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                instructions
                    .alignment(Alignment::Center)
                    .position(Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(symbols::border::PLAIN)
    }

    fn render_setup(&self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(area.width, 9, area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(2),
            ])
            .flex(layout::Flex::Center)
            .split(area);

        Paragraph::new("How many letters in your word?")
            .bold()
            .centered()
            .render(rows[0], buf);

        let counts: Vec<usize> = SETUP_COUNT_RANGE.collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(BOX_WIDTH); counts.len()])
            .flex(layout::Flex::Center)
            .split(rows[1]);
        for (i, count) in counts.into_iter().enumerate() {
            let selected = count == self.setup_count;
            let style = if selected {
                Style::default().light_yellow()
            } else {
                Style::default()
            };
            letter_box(count.to_string(), selected, style, style).render(columns[i], buf);
        }

        Paragraph::new(Line::from(
            [key_hint("←/→", "choose ", true), key_hint("Enter", "start", true)].concat(),
        ))
        .centered()
        .render(rows[2], buf);
    }

    fn render_game(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(area);

        self.render_graveyard(rows[0], buf);
        self.render_controls(rows[1], buf);
        self.render_gallows(rows[2], buf);
        self.render_word(rows[4], buf);
        self.render_keyboard(rows[6], buf);
        self.render_keyboard_actions(rows[7], buf);
    }

    fn render_graveyard(&self, area: Rect, buf: &mut Buffer) {
        let title = Title::from(
            format!(
                " Graveyard {}/{} ",
                self.game.wrong_count(),
                MAX_WRONG_GUESSES
            )
            .bold(),
        );
        let block = Block::new().title(title.alignment(Alignment::Center));
        let inner = block.inner(area);
        block.render(area, buf);

        let graveyard = self.game.graveyard();
        if graveyard.is_empty() {
            Paragraph::new("no buried letters".dark_gray())
                .centered()
                .block(Block::new().padding(Padding::new(0, 0, 1, 0)))
                .render(inner, buf);
            return;
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(BOX_WIDTH); graveyard.len()])
            .flex(layout::Flex::Center)
            .split(inner);
        for (i, letter) in graveyard.iter().enumerate() {
            let cursor = self.focus == Focus::Graveyard && i == self.grave_cursor;
            let style = Style::default().light_red();
            letter_box(letter.to_string(), cursor, style, style).render(columns[i], buf);
        }
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer) {
        let len = self.game.layout().len();
        let line = Line::from(
            [
                key_hint("-", "remove last ", len > MIN_LAYOUT_LEN),
                key_hint("_", "add space ", len < MAX_LAYOUT_LEN),
                key_hint("+", "add letter ", len < MAX_LAYOUT_LEN),
                key_hint("^N", "new game", true),
            ]
            .concat(),
        );
        Paragraph::new(line).centered().render(area, buf);
    }

    fn render_gallows(&self, area: Rect, buf: &mut Buffer) {
        let style = match self.game.phase() {
            Phase::Lost => Style::default().light_red(),
            _ => Style::default(),
        };
        let lines: Vec<Line<'_>> = gallows::figure(self.game.wrong_count())
            .into_iter()
            .map(|l| Line::styled(l, style))
            .collect();
        Paragraph::new(lines).centered().render(area, buf);
    }

    fn render_word(&self, area: Rect, buf: &mut Buffer) {
        let slots = self.game.layout();
        let widths: Vec<Constraint> = slots
            .iter()
            .map(|slot| match slot {
                Slot::Space => Constraint::Length(SPACE_WIDTH),
                _ => Constraint::Length(BOX_WIDTH),
            })
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .flex(layout::Flex::Center)
            .split(area);

        for (i, slot) in slots.iter().enumerate() {
            let cursor = self.focus == Focus::Word && i == self.slot_cursor;
            let border_style = match self.game.target_index() {
                Some(target) if target == i => Style::default().light_yellow(),
                _ => Style::default(),
            };
            let (text, text_style) = match slot {
                Slot::Space => continue,
                Slot::Letter(c) => (c.to_string(), Style::default().light_green()),
                Slot::Empty => ("_".to_string(), Style::default().dark_gray()),
            };
            letter_box(text, cursor, border_style, text_style).render(columns[i], buf);
        }
    }

    fn render_keyboard(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); KEYBOARD_ROWS.len()])
            .split(area);

        for (r, keys) in KEYBOARD_ROWS.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Length(BOX_WIDTH); keys.len()])
                .flex(layout::Flex::Center)
                .split(rows[r]);
            for (c, &key) in keys.iter().enumerate() {
                let cursor = self.focus == Focus::Keyboard && self.key_cursor == (r, c);
                let style = if self.game.is_buried(key) {
                    Style::default().dark_gray()
                } else if self.game.armed_letter() == Some(key) {
                    Style::default().black().on_light_yellow()
                } else {
                    Style::default()
                };
                letter_box(key.to_string(), cursor, style, style).render(columns[c], buf);
            }
        }
    }

    fn render_keyboard_actions(&self, area: Rect, buf: &mut Buffer) {
        let armed = self.game.armed_letter().is_some();
        let line = Line::from(
            [
                key_hint("Enter", "confirm ", armed),
                key_hint("Backspace", "discard ", armed),
                key_hint("*", "clear all", true),
            ]
            .concat(),
        );
        Paragraph::new(line).centered().render(area, buf);
    }

    fn render_game_over(&self, area: Rect, buf: &mut Buffer) {
        let won = self.game.phase() == Phase::Won;
        let (title, message, style) = if won {
            (
                " Congratulations! ",
                "You filled all the blanks!",
                Style::default().light_green(),
            )
        } else {
            (
                " Game Over ",
                "The hangman is complete...",
                Style::default().light_red(),
            )
        };
        let area = centered_rect(36, 7, area);
        Clear.render(area, buf);

        let block = Block::default()
            .title(Title::from(title.bold()).alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .padding(Padding::new(0, 0, 1, 0));
        Paragraph::new(vec![
            Line::from(message),
            Line::from(""),
            Line::from(key_hint("Enter", "play again", true)),
        ])
        .centered()
        .block(block)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::super::actions::Action;
    use super::*;

    fn render(app: &App) -> Vec<String> {
        let area = Rect::new(0, 0, 110, 44);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.get(x, y).symbol().to_string())
                    .collect()
            })
            .collect()
    }

    fn contains(lines: &[String], text: &str) -> bool {
        lines.iter().any(|l| l.contains(text))
    }

    #[test]
    fn setup_screen() {
        let lines = render(&App::init(None));
        assert!(contains(&lines, "Sandbox Hangman"));
        assert!(contains(&lines, "How many letters in your word?"));
        assert!(contains(&lines, "15"));
    }

    #[test]
    fn game_screen() {
        let mut app = App::init(Some(3));
        for action in [Action::EnterChar('q'), Action::Discard] {
            app.update(Some(action));
        }
        let lines = render(&app);
        assert!(contains(&lines, "Graveyard 1/6"));
        assert!(contains(&lines, "+---+"));
        assert!(contains(&lines, "|   O"));
        assert!(contains(&lines, "clear all"));
        assert!(!contains(&lines, "Game Over"));
    }

    #[test]
    fn lost_overlay() {
        let mut app = App::init(Some(3));
        for c in ['a', 'b', 'c', 'd', 'e', 'f'] {
            app.update(Some(Action::EnterChar(c)));
            app.update(Some(Action::Discard));
        }
        let lines = render(&app);
        assert!(contains(&lines, "Game Over"));
        assert!(contains(&lines, "The hangman is complete..."));
    }

    #[test]
    fn won_overlay() {
        let mut app = App::init(Some(1));
        for action in [Action::EnterChar('z'), Action::Tap, Action::Enter] {
            app.update(Some(action));
        }
        let lines = render(&app);
        assert!(contains(&lines, "Congratulations!"));
        assert!(contains(&lines, "You filled all the blanks!"));
    }
}
