//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, strength colouring.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::pass::Strength;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const CYAN: &str = "\x1b[38;5;14m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// True when stdin is a terminal.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Strength label wrapped in its colour.
pub fn paint_strength(strength: Strength) -> String {
    let color = match strength {
        Strength::VeryWeak => RED,
        Strength::Weak => YELLOW,
        Strength::Medium => CYAN,
        Strength::Strong => GREEN,
    };
    format!("{color}{strength}{RESET}")
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Usable columns between `│ ` and ` │`.
const INNER: usize = BOX_WIDTH - 4;

/// Column where help descriptions start.
const FLAG_COL: usize = 27;

/// `┌─ Title ──...─┐`, or a plain edge when `title` is empty.
pub fn box_top(title: &str) {
    let head = if title.is_empty() {
        String::new()
    } else {
        format!("─ {title} ")
    };
    let rest = (BOX_WIDTH - 2).saturating_sub(head.chars().count());
    println!("┌{head}{}┐", "─".repeat(rest));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Left-aligned content row. Overlong content overflows the right edge.
pub fn box_line(content: &str) {
    println!("│ {} │", pad_right(content, INNER));
}

pub fn box_line_center(content: &str) {
    let slack = INNER.saturating_sub(console_width(content));
    let left = " ".repeat(slack / 2);
    println!("│ {} │", pad_right(&format!("{left}{content}"), INNER));
}

/// Help row: flag in a fixed column, description word-wrapped beside it.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_cell = pad_right(&truncate_chars(flag, FLAG_COL), FLAG_COL);
    let indent = " ".repeat(FLAG_COL);
    let desc_width = INNER - FLAG_COL;

    let lines = wrap_words(desc, desc_width);
    if lines.is_empty() {
        box_line(&flag_cell);
        return;
    }
    for (i, line) in lines.iter().enumerate() {
        let lead = if i == 0 { &flag_cell } else { &indent };
        println!("│ {lead}{} │", pad_right(line, desc_width));
    }
}

/// Pad with spaces up to `width` visible columns.
fn pad_right(content: &str, width: usize) -> String {
    let fill = width.saturating_sub(console_width(content));
    format!("{content}{}", " ".repeat(fill))
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Greedy word wrap by character count. A single word longer than
/// `width` gets a line of its own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Display width in chars, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (false, _) => width += 1,
            (true, 'm') => in_escape = false,
            (true, _) => {}
        }
    }
    width
}
