//! Password generation and strength assessment.

pub mod assess;
pub mod charset;
pub mod clipboard;
mod generate;

pub use assess::{Assessment, Strength, assess, format_bits};
pub use charset::CharClasses;
pub use generate::{
    DEFAULT_LENGTH, GenerateError, GenerationRequest, Generator, MAX_COUNT, MAX_LENGTH, cap_count,
    fit_length, parse_length,
};
