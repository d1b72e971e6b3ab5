use crate::history::History;
use crate::pass::{Assessment, DEFAULT_LENGTH, MAX_COUNT, MAX_LENGTH, format_bits};
use crate::settings::Settings;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, clear, flush,
    paint_strength, print_error, print_rule,
};

use super::options::Notice;

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

pub fn print_help() {
    box_top("Passmeter");
    box_line_center("Password generator with strength meter");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a menu to generate");
    box_line("     passwords, tweak settings and browse this session's history.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  passmeter [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!(
            "Characters per password (default: {DEFAULT_LENGTH}, max: {MAX_LENGTH}). \
             Invalid values use {DEFAULT_LENGTH}."
        ),
    );
    box_opt(
        "  -n, --number <N>",
        &format!("How many passwords to generate (default: 1, max: {MAX_COUNT})"),
    );
    box_opt("      --no-letters", "Leave out a-z and A-Z");
    box_opt("      --no-digits", "Leave out 0-9");
    box_opt("      --no-special", "Leave out !@#$%^&*()");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Also copy the password(s) to the clipboard");
    box_opt("  -q, --quiet", "Print passwords only, no strength report");
    box_line("");
    box_line(" Strength:");
    box_opt("  -a, --assess <PASSWORD>", "Rate a password instead of generating. Use - to read it from stdin.");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from the saved settings file");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -V, --version", "Display version");
    box_line("");
    box_line("STRENGTH:");
    box_line("  entropy = length x log2(pool), pool inferred from character types");
    box_line("  < 28 very weak | 28-36 weak | 36-60 medium | >= 60 strong");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passmeter                    Interactive menu");
    box_line("  passmeter -l 16              One password, 16 characters");
    box_line("  passmeter -l 20 -n 3         Three passwords, 20 characters each");
    box_line("  passmeter --no-special -b    Alphanumeric, copied to clipboard");
    box_line("  passmeter -a -               Rate a password typed on stdin");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_main_menu(print_invalid: &mut bool) {
    box_top("Main Menu");
    box_line("");
    box_line("  1) generate");
    box_line("  2) settings");
    box_line("  3) history");
    box_line("  4) check a password");
    box_line("  5) tip");
    box_line("  6) help");
    box_line("  7) quit");
    box_line("");
    box_bottom();

    if *print_invalid {
        print_error("Invalid option.");
        *print_invalid = false;
    } else {
        println!();
    }
    flush();
}

pub fn print_settings_menu(settings: &Settings, notice: &Notice) {
    clear();
    box_top("Settings Menu");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!("  1) Password Length: {}", settings.pass_length));
    box_line(&format!("  2) Number of Passwords: {}", settings.number_of_passwords));

    box_line("");
    box_line(&format!("{UNDERLINE}Character Types{RESET}:"));
    box_line(&format!("  3) Letters (a-z, A-Z): {}", settings.use_letters));
    box_line(&format!("  4) Digits (0-9): {}", settings.use_digits));
    box_line(&format!("  5) Specials (!@#$%^&*()): {}", settings.use_specials));
    if settings.classes().is_empty() {
        box_line("      - No character types selected, generation will fail");
    }

    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    box_line(&format!("  6) Copy to clipboard: {}", settings.copy_to_clipboard));

    box_line("");
    print_rule();
    box_line("     r) load defaults  |  f) load saved  |  s) save");
    box_line("     Enter) generate   |  Esc) back");
    box_bottom();

    match notice {
        Notice::None => println!(),
        Notice::NotBool => print_error("Invalid input, please enter 't' or 'f'..."),
        Notice::InvalidOption => print_error("Invalid input, please enter a valid menu option..."),
        Notice::Message(msg) => print_error(msg),
    }
    flush();
}

/// Box with one generated password and its rating.
pub fn print_generated(password: &str, assessment: &Assessment, copied: bool) {
    box_top("Password");
    box_line(password);
    print_rule();
    print_rating(assessment);
    if copied {
        box_line("Copied to clipboard!");
    }
    box_bottom();
}

pub fn print_assessment(assessment: &Assessment) {
    box_top("Strength");
    print_rating(assessment);
    box_bottom();
}

fn print_rating(assessment: &Assessment) {
    box_line(&format!("Strength: {}", paint_strength(assessment.strength)));
    box_line(&format!(
        "Entropy: {} bits",
        format_bits(assessment.entropy_bits)
    ));
    box_line(&format!("Pool: {} chars", assessment.pool_size));
}

pub fn print_history(history: &History) {
    box_top("History");
    box_line_center("kept for this session only");
    box_line("");
    for line in history.render_lines() {
        box_line(&line);
    }
    box_line("");
    print_rule();
    box_line("     c) clear  |  Enter/Esc) back");
    box_bottom();
    flush();
}

pub fn print_tip(tip: &str) {
    box_top("Tip");
    box_line(tip);
    box_bottom();
    println!();
}
