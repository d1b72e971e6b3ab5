//! Session history of generated passwords and tips.
//!
//! Lives only in memory for the current run. Stored passwords are wiped when
//! the history is cleared or dropped.

use zeroize::Zeroizing;

use crate::pass::{Assessment, Strength, format_bits};

#[derive(Debug)]
pub enum HistoryEntry {
    Generated {
        password: Zeroizing<String>,
        strength: Strength,
        entropy_bits: f64,
    },
    Tip {
        message: String,
    },
}

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_generated(&mut self, password: &str, assessment: &Assessment) {
        self.entries.push(HistoryEntry::Generated {
            password: Zeroizing::new(password.to_owned()),
            strength: assessment.strength,
            entropy_bits: assessment.entropy_bits,
        });
    }

    pub fn record_tip(&mut self, message: &str) {
        self.entries.push(HistoryEntry::Tip {
            message: message.to_owned(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// One numbered line per entry, oldest first.
    pub fn render_lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec!["No entries.".to_string()];
        }

        self.entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                HistoryEntry::Generated {
                    password,
                    strength,
                    entropy_bits,
                } => format!(
                    "{}. Password: {} | Strength: {} | Entropy: {} bits",
                    i + 1,
                    password.as_str(),
                    strength,
                    format_bits(*entropy_bits)
                ),
                HistoryEntry::Tip { message } => format!("{}. {}", i + 1, message),
            })
            .collect()
    }
}
