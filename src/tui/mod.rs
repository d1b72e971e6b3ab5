//! Interactive TUI menus.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::settings::Settings;

/// Run TUI interactive mode.
pub fn run() {
    let settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            println!("Error loading settings: {}", e);
            Settings::default()
        }
    };

    Session::new(settings).main_menu();
}
