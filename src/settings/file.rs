//! Settings file persistence.
//!
//! A single comma-separated line:
//! `length,count,letters,digits,specials,clipboard`

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use log::debug;

use super::Settings;
use crate::pass::{cap_count, fit_length};

const FIELDS: usize = 6;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(format_line(settings).as_bytes())?;
    debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    let contents = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no settings file at {}, using defaults", path.display());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if let Some(line) = contents.lines().next() {
        parse_line(line, settings);
    }
    Ok(())
}

fn format_line(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.use_letters,
        settings.use_digits,
        settings.use_specials,
        settings.copy_to_clipboard
    )
}

/// Fields that fail to parse keep their current value. A line with the
/// wrong field count is ignored entirely.
fn parse_line(line: &str, settings: &mut Settings) {
    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        debug!("ignoring settings line with {} fields", parts.len());
        return;
    }

    settings.pass_length = parts[0]
        .parse()
        .ok()
        .filter(|&n| n >= 1)
        .map(fit_length)
        .unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1]
        .parse()
        .ok()
        .filter(|&n| n >= 1)
        .map(cap_count)
        .unwrap_or(settings.number_of_passwords);
    settings.use_letters = parts[2].parse().unwrap_or(settings.use_letters);
    settings.use_digits = parts[3].parse().unwrap_or(settings.use_digits);
    settings.use_specials = parts[4].parse().unwrap_or(settings.use_specials);
    settings.copy_to_clipboard = parts[5].parse().unwrap_or(settings.copy_to_clipboard);
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passmeter/settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{MAX_COUNT, MAX_LENGTH};

    #[test]
    fn line_round_trips() {
        let settings = Settings {
            pass_length: 24,
            number_of_passwords: 3,
            use_letters: true,
            use_digits: false,
            use_specials: true,
            copy_to_clipboard: false,
        };
        let line = format_line(&settings);
        assert_eq!(line, "24,3,true,false,true,false\n");

        let mut parsed = Settings::default();
        parse_line(&line, &mut parsed);
        assert_eq!(parsed, settings);
    }

    #[test]
    fn bad_fields_keep_previous_values() {
        let mut settings = Settings::default();
        parse_line("zero,0,yes,false,true,true", &mut settings);
        assert_eq!(settings.pass_length, 12);
        assert_eq!(settings.number_of_passwords, 1);
        assert!(settings.use_letters);
        assert!(!settings.use_digits);
    }

    #[test]
    fn oversized_values_are_capped() {
        let mut settings = Settings::default();
        parse_line("18446744073709551615,99999999,true,true,true,true", &mut settings);
        assert_eq!(settings.pass_length, MAX_LENGTH);
        assert_eq!(settings.number_of_passwords, MAX_COUNT);
    }

    #[test]
    fn wrong_field_count_is_ignored() {
        let mut settings = Settings::default();
        parse_line("30,2,false", &mut settings);
        assert_eq!(settings, Settings::default());
    }
}
