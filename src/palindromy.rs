use crate::{
    config::{Config, PunctuationMarks},
    scan,
};
use tracing::debug;

/// A palindrome checker bound to one normalization policy.
///
/// The policy is fixed at construction and only read afterwards, so a single
/// `Palindromy` can be shared across threads and reused for any number of
/// checks.
#[derive(Debug, Clone, Default)]
pub struct Palindromy {
    config: Config,
}

impl Palindromy {
    pub fn builder() -> PalindromyBuilder {
        PalindromyBuilder::default()
    }

    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `None` is the absent input and resolves to `null_okay`.
    pub fn check(&self, text: Option<&str>) -> bool {
        let verdict = scan::check(text, &self.config);
        debug!(
            len = text.map(str::len),
            palindrome = verdict,
            "palindrome check"
        );
        verdict
    }

    #[inline]
    pub fn is_palindrome(&self, text: &str) -> bool {
        self.check(Some(text))
    }
}

#[derive(Default)]
pub struct PalindromyBuilder {
    config: Config,
}

impl PalindromyBuilder {
    /// Replace the whole policy; later setters still apply on top of it.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn skip_whitespace(mut self, on: bool) -> Self {
        self.config.skip_whitespace = on;
        self
    }

    pub fn remove_diacritics(mut self, on: bool) -> Self {
        self.config.remove_diacritics = on;
        self
    }

    pub fn case_insensitive(mut self, on: bool) -> Self {
        self.config.case_insensitive = on;
        self
    }

    pub fn remove_punctuation(mut self, on: bool) -> Self {
        self.config.remove_punctuation = on;
        self
    }

    pub fn punctuation_marks(mut self, marks: impl Into<PunctuationMarks>) -> Self {
        self.config.punctuation_marks = marks.into();
        self
    }

    pub fn null_okay(mut self, on: bool) -> Self {
        self.config.null_okay = on;
        self
    }

    pub fn blank_string_okay(mut self, on: bool) -> Self {
        self.config.blank_string_okay = on;
        self
    }

    pub fn build(self) -> Palindromy {
        Palindromy::new(self.config)
    }
}
