// File: src/core/config.rs
use crate::error::{DictError, DictResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Tunables for title acceptance and romanization.
///
/// Every field has a default, so a JSON config only needs the keys it
/// overrides: `{"min_length": 3}` is a complete file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Titles shorter than this (in characters) are dropped.
    pub min_length: usize,
    /// Suffixes marking index and comparison pages.
    pub list_page_endings: Vec<String>,
    /// Prefix suppression only kicks in once the previous title is this long.
    pub prefix_min_length: usize,
    pub ideograph_start: char,
    pub ideograph_end: char,
    /// Maps a syllable the reader gets wrong to the one we want.
    pub pinyin_fixes: HashMap<String, String>,
    /// Extra phrase readings layered over the built-in table, e.g.
    /// `{"银行": "yin hang"}`.
    pub phrase_readings: HashMap<String, String>,
    pub separator: String,
    /// Progress is logged every `log_every` accepted titles; 0 disables it.
    pub log_every: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_length: 2,
            list_page_endings: vec!["列表".to_string(), "对照表".to_string()],
            prefix_min_length: 4,
            ideograph_start: '\u{4e00}',
            ideograph_end: '\u{9fa5}',
            // 嗯 comes back as a bare "n"
            pinyin_fixes: HashMap::from([("n".to_string(), "en".to_string())]),
            phrase_readings: HashMap::new(),
            separator: "'".to_string(),
            log_every: 1000,
        }
    }
}

impl FilterConfig {
    pub fn from_file(path: &Path) -> DictResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| DictError::io(path, e))?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| DictError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate().map_err(|reason| DictError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        for (phrase, reading) in &self.phrase_readings {
            if reading.split_whitespace().count() != phrase.chars().count() {
                return Err(format!("reading '{}' does not fit phrase '{}'", reading, phrase));
            }
        }
        if self.ideograph_start > self.ideograph_end {
            return Err(format!(
                "ideograph range is empty: U+{:04X} > U+{:04X}",
                self.ideograph_start as u32, self.ideograph_end as u32
            ));
        }
        Ok(())
    }

    pub fn is_ideograph(&self, c: char) -> bool {
        (self.ideograph_start..=self.ideograph_end).contains(&c)
    }
}
