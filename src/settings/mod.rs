//! Password generation settings.

mod file;

use crate::pass::{CharClasses, DEFAULT_LENGTH, GenerationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub use_letters: bool,
    pub use_digits: bool,
    pub use_specials: bool,
    pub copy_to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn classes(&self) -> CharClasses {
        CharClasses {
            letters: self.use_letters,
            digits: self.use_digits,
            specials: self.use_specials,
        }
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length, self.classes())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            use_letters: true,
            use_digits: true,
            use_specials: true,
            copy_to_clipboard: true,
        }
    }
}
