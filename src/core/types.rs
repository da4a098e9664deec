// src/core/types.rs
use std::collections::HashSet;
use std::fmt;

/// Titles that must never be emitted, stored in canonical simplified form.
pub type ExclusionSet = HashSet<String>;

/// Frequency column written for every record. Downstream builders rank
/// entries themselves.
pub const DEFAULT_FREQUENCY: &str = "0";

/// One dictionary line: `<title>\t<pinyin>\t0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    /// Syllables joined by the configured separator, e.g. `ce'shi`.
    pub pinyin: String,
}

impl Record {
    pub fn new(title: impl Into<String>, pinyin: impl Into<String>) -> Self {
        Self { title: title.into(), pinyin: pinyin.into() }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.title, self.pinyin, DEFAULT_FREQUENCY)
    }
}
