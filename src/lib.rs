pub mod classify;
pub mod config;
pub mod input;
pub mod palindromy;
pub mod scan;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Config, POSIX_PUNCTUATION, PunctuationMarks};
pub use input::InputError;
pub use palindromy::{Palindromy, PalindromyBuilder};
pub use scan::check;
