//! CLI context - bundles settings and flags.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;
use zeroize::Zeroizing;

use super::{CliFlags, prompts};
use crate::pass::{
    Assessment, GenerateError, Generator, assess, cap_count, clipboard, format_bits, parse_length,
};
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error: {0}")]
    Generate(#[from] GenerateError),
    #[error("Failed to read password from stdin: {0}")]
    Stdin(#[from] io::Error),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Settings start from defaults (or the saved file with `-s`); flags
    /// are applied on top.
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        let mut ctx = Self { settings, flags };
        ctx.apply_flags();
        ctx
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if let Some(input) = self.flags.assess.take() {
            return assess_output(&input);
        }
        self.generate_output()
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(ref len) = self.flags.length {
            self.settings.pass_length = parse_length(len);
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = cap_count(num);
        }

        if self.flags.no_letters {
            self.settings.use_letters = false;
        }
        if self.flags.no_digits {
            self.settings.use_digits = false;
        }
        if self.flags.no_special {
            self.settings.use_specials = false;
        }

        // The clipboard is opt-in on the command line
        self.settings.copy_to_clipboard = self.flags.clipboard;
    }

    /// Generate passwords, print them with their rating, then copy if asked.
    fn generate_output(&self) -> Result<(), CliError> {
        let request = self.settings.request();
        debug!(
            "generating {} password(s) of length {}",
            self.settings.number_of_passwords,
            request.length()
        );
        let passwords = Generator::from_entropy()
            .generate_batch(&request, self.settings.number_of_passwords)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for password in &passwords {
            let _ = writeln!(out, "{}", password.as_str());
            if !prompts::quiet() {
                let _ = writeln!(out, "  {}", report_line(&assess(password)));
            }
        }
        drop(out);

        if self.settings.copy_to_clipboard {
            let joined = Zeroizing::new(
                passwords
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
            if clipboard::copy(&joined) {
                prompts::clipboard_copied();
            } else {
                prompts::clipboard_failed();
            }
        }
        Ok(())
    }
}

fn assess_output(input: &str) -> Result<(), CliError> {
    let password = if input == "-" {
        read_password(io::stdin().lock())?
    } else {
        Zeroizing::new(input.to_owned())
    };

    println!("{}", report_line(&assess(&password)));
    Ok(())
}

/// First line of `reader`, without its line ending.
fn read_password<R: BufRead>(mut reader: R) -> io::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    reader.read_line(&mut line)?;
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(line)
}

fn report_line(assessment: &Assessment) -> String {
    format!(
        "Strength: {} | Entropy: {} bits | Pool: {} chars",
        assessment.strength,
        format_bits(assessment.entropy_bits),
        assessment.pool_size
    )
}
