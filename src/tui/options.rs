use log::debug;
use rand::thread_rng;
use zeroize::Zeroizing;

use crate::history::History;
use crate::pass::{Generator, assess, cap_count, clipboard, fit_length};
use crate::settings::Settings;
use crate::terminal::{clear, print_error, reset_terminal};
use crate::tips::Tips;

use super::{
    enter_prompt, get_editable_input, get_numeric_input, get_secret_input, print_assessment,
    print_generated, print_help, print_history, print_main_menu, print_settings_menu, print_tip,
};

/// Message shown under the settings menu.
pub enum Notice {
    None,
    NotBool,
    InvalidOption,
    Message(String),
}

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Interactive session state. Nothing here outlives the process.
pub struct Session {
    settings: Settings,
    generator: Generator,
    history: History,
    tips: Tips,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            generator: Generator::from_entropy(),
            history: History::new(),
            tips: Tips::new(),
        }
    }

    pub fn main_menu(&mut self) {
        reset_terminal();
        clear();

        let mut print_invalid = false;

        loop {
            print_main_menu(&mut print_invalid);

            let input = match get_editable_input(enter_prompt(), "") {
                Some(s) => s,
                None => {
                    clear();
                    continue;
                }
            };

            match input.trim() {
                "" | "1" => {
                    clear();
                    self.generate();
                }
                "2" => self.update_settings(),
                "3" => self.show_history(),
                "4" => {
                    clear();
                    self.check_password();
                }
                "5" => {
                    clear();
                    self.show_tip();
                }
                "6" => {
                    clear();
                    print_help();
                }
                "7" | "q" => {
                    clear();
                    break;
                }
                _ => {
                    clear();
                    print_invalid = true;
                }
            }
        }
    }

    /// Generate with the current settings, show each result and log it.
    fn generate(&mut self) {
        let request = self.settings.request();
        let count = self.settings.number_of_passwords;

        let passwords = match self.generator.generate_batch(&request, count) {
            Ok(p) => p,
            Err(e) => {
                print_error(&format!("Error: {e}"));
                println!();
                return;
            }
        };

        let copied = self.settings.copy_to_clipboard && {
            let joined = Zeroizing::new(
                passwords
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
            clipboard::copy(&joined)
        };

        for (i, password) in passwords.iter().enumerate() {
            let assessment = assess(password);
            // Only the last box carries the clipboard note
            let is_last = i + 1 == passwords.len();
            print_generated(password, &assessment, copied && is_last);
            self.history.record_generated(password, &assessment);
        }
        println!();
    }

    fn show_history(&mut self) {
        loop {
            clear();
            print_history(&self.history);

            let input = match get_editable_input("Enter your choice", "") {
                Some(s) => s,
                None => break,
            };

            match input.trim() {
                "c" => {
                    debug!("clearing {} history entries", self.history.len());
                    self.history.clear();
                }
                _ => break,
            }
        }
        clear();
    }

    fn check_password(&mut self) {
        let password = match get_secret_input("Password to check") {
            Some(p) => p,
            None => return,
        };
        print_assessment(&assess(&password));
        println!();
    }

    fn show_tip(&mut self) {
        if self.tips.is_spent() {
            print_error("No more tips this session.");
            println!();
            return;
        }
        if let Some(tip) = self.tips.draw(&mut thread_rng()) {
            self.history.record_tip(tip);
            print_tip(tip);
        }
    }

    fn update_settings(&mut self) {
        let mut notice = Notice::None;

        loop {
            print_settings_menu(&self.settings, &notice);
            notice = Notice::None;

            let choice = match get_editable_input(enter_prompt(), "") {
                Some(s) => s,
                None => {
                    clear();
                    break; // ESC pressed - return to main menu
                }
            };
            let choice = choice.trim();

            let action = match choice.parse::<i32>() {
                Ok(num) => self.menu_options(num, &mut notice),
                Err(_) => self.command_options(choice, &mut notice),
            };
            if let Break = action {
                break;
            }
        }
    }

    fn menu_options(&mut self, choice: i32, notice: &mut Notice) -> LoopAction {
        let settings = &mut self.settings;
        match choice {
            1 => {
                if let Some(len) =
                    get_numeric_input("Enter new password length", settings.pass_length)
                {
                    settings.pass_length = fit_length(len);
                }
            }
            2 => {
                if let Some(num) =
                    get_numeric_input("Enter number of passwords", settings.number_of_passwords)
                {
                    settings.number_of_passwords = cap_count(num);
                }
            }
            3 => read_bool(&mut settings.use_letters, notice),
            4 => read_bool(&mut settings.use_digits, notice),
            5 => read_bool(&mut settings.use_specials, notice),
            6 => read_bool(&mut settings.copy_to_clipboard, notice),
            _ => *notice = Notice::InvalidOption,
        }
        Continue
    }

    fn command_options(&mut self, choice: &str, notice: &mut Notice) -> LoopAction {
        match choice {
            "" => {
                clear();
                self.generate();
                Break
            }
            "s" => {
                if let Err(e) = self.settings.save_to_file() {
                    *notice = Notice::Message(format!("Error saving settings: {e}"));
                }
                Continue
            }
            "r" => {
                self.settings = Settings::default();
                Continue
            }
            "f" => {
                match Settings::load_from_file() {
                    Ok(s) => self.settings = s,
                    Err(e) => {
                        *notice = Notice::Message(format!("Error loading settings: {e}"));
                    }
                }
                Continue
            }
            _ => {
                *notice = Notice::InvalidOption;
                Continue
            }
        }
    }
}

fn read_bool(target: &mut bool, notice: &mut Notice) {
    let new_bool = match get_editable_input("Enter 't' or 'f'", "") {
        Some(s) => s,
        None => return,
    };
    match parse_bool(&new_bool) {
        Some(value) => *target = value,
        None if new_bool.trim().is_empty() => {}
        None => *notice = Notice::NotBool,
    }
}

fn parse_bool(input: &str) -> Option<bool> {
    match input.trim() {
        "t" | "true" => Some(true),
        "f" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_answers() {
        assert_eq!(parse_bool("t"), Some(true));
        assert_eq!(parse_bool(" false "), Some(false));
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool(""), None);
    }
}
