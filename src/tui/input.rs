use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use zeroize::{Zeroize, Zeroizing};

use crate::terminal::{flush, reset_terminal};

/// Raw mode for as long as the guard lives.
struct RawMode;

impl RawMode {
    fn enable() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Echo {
    Plain,
    Masked,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Submit,
    Cancel,
    Interrupt,
}

/// Single-line buffer with a cursor. Contents are wiped on drop.
struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    /// Apply one key press. Returns an outcome once editing is over.
    fn apply(&mut self, key: KeyEvent, accept: fn(char) -> bool) -> Option<Outcome> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Some(Outcome::Interrupt),
            KeyCode::Char('q') if ctrl => return Some(Outcome::Cancel),
            KeyCode::Char('u') if ctrl => {
                self.chars.zeroize();
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Some(Outcome::Cancel),
            KeyCode::Enter => return Some(Outcome::Submit),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        None
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn shown(&self, echo: Echo) -> String {
        match echo {
            Echo::Plain => self.text(),
            Echo::Masked => "*".repeat(self.chars.len()),
        }
    }
}

impl Drop for LineEditor {
    fn drop(&mut self) {
        self.chars.zeroize();
    }
}

fn redraw(prompt: &str, editor: &LineEditor, echo: Echo, last_len: usize) {
    print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
    print!("\r{}: {}", prompt, editor.shown(echo));
    // Column is 1-based
    print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor);
    flush();
}

/// Read a line in raw mode. `None` when cancelled with Esc or Ctrl+Q.
fn edit_line(
    prompt: &str,
    initial: &str,
    echo: Echo,
    accept: fn(char) -> bool,
) -> Option<LineEditor> {
    let mut editor = LineEditor::new(initial);

    let guard = match RawMode::enable() {
        Ok(g) => g,
        Err(_) => return Some(editor),
    };

    redraw(prompt, &editor, echo, 0);
    let mut last_len = editor.chars.len();

    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                if let Some(outcome) = editor.apply(key, accept) {
                    break outcome;
                }
                redraw(prompt, &editor, echo, last_len);
                last_len = editor.chars.len();
            }
            Ok(_) => {}
            Err(_) => break Outcome::Cancel,
        }
    };

    // Leave raw mode before printing the newline
    drop(guard);
    println!();

    match outcome {
        Outcome::Submit => Some(editor),
        Outcome::Cancel => None,
        Outcome::Interrupt => {
            drop(editor);
            reset_terminal();
            std::process::exit(0);
        }
    }
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, Echo::Plain, |_| true).map(|e| e.text())
}

/// Like [`get_editable_input`] but echoes `*` for every character.
pub fn get_secret_input(prompt: &str) -> Option<Zeroizing<String>> {
    edit_line(prompt, "", Echo::Masked, |_| true).map(|e| Zeroizing::new(e.text()))
}

/// Digits only. Empty input yields `Some(0)`.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    edit_line(prompt, &initial, Echo::Plain, |c: char| c.is_ascii_digit())
        .map(|e| e.text().parse().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(editor: &mut LineEditor, s: &str, accept: fn(char) -> bool) {
        for c in s.chars() {
            assert_eq!(editor.apply(key(KeyCode::Char(c)), accept), None);
        }
    }

    #[test]
    fn typing_and_cursor_movement() {
        let mut editor = LineEditor::new("");
        type_str(&mut editor, "acd", |_| true);
        editor.apply(key(KeyCode::Left), |_| true);
        editor.apply(key(KeyCode::Left), |_| true);
        type_str(&mut editor, "b", |_| true);
        assert_eq!(editor.text(), "abcd");
        assert_eq!(editor.cursor, 2);

        editor.apply(key(KeyCode::End), |_| true);
        editor.apply(key(KeyCode::Backspace), |_| true);
        editor.apply(key(KeyCode::Home), |_| true);
        editor.apply(key(KeyCode::Delete), |_| true);
        assert_eq!(editor.text(), "bc");
    }

    #[test]
    fn cursor_handles_multibyte_chars() {
        let mut editor = LineEditor::new("\u{eb}\u{e9}");
        assert_eq!(editor.cursor, 2);
        editor.apply(key(KeyCode::Backspace), |_| true);
        assert_eq!(editor.text(), "\u{eb}");
        editor.apply(key(KeyCode::Right), |_| true);
        assert_eq!(editor.cursor, 1);
    }

    #[test]
    fn filter_rejects_characters() {
        let mut editor = LineEditor::new("1");
        type_str(&mut editor, "2a-3", |c: char| c.is_ascii_digit());
        assert_eq!(editor.text(), "123");
    }

    #[test]
    fn control_keys_end_editing() {
        let mut editor = LineEditor::new("x");
        assert_eq!(editor.apply(key(KeyCode::Enter), |_| true), Some(Outcome::Submit));
        assert_eq!(editor.apply(key(KeyCode::Esc), |_| true), Some(Outcome::Cancel));
        assert_eq!(editor.apply(ctrl('q'), |_| true), Some(Outcome::Cancel));
        assert_eq!(editor.apply(ctrl('c'), |_| true), Some(Outcome::Interrupt));
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut editor = LineEditor::new("secret");
        assert_eq!(editor.apply(ctrl('u'), |_| true), None);
        assert_eq!(editor.text(), "");
        assert_eq!(editor.cursor, 0);
    }

    #[test]
    fn masked_echo_hides_text() {
        let editor = LineEditor::new("hunter2");
        assert_eq!(editor.shown(Echo::Masked), "*******");
        assert_eq!(editor.shown(Echo::Plain), "hunter2");
    }
}
