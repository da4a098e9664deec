// File: src/core/phrases.rs
use std::collections::HashMap;
use tracing::warn;

const BUILTIN_PHRASES: &str = include_str!("../../data/phrases.txt");

/// Whole-word readings for polyphonic characters, e.g. 银行 -> yin hang.
///
/// Looked up longest-first before falling back to per-character readings.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    readings: HashMap<String, Vec<String>>,
    /// Longest key, in characters.
    max_len: usize,
}

impl PhraseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_PHRASES)
    }

    /// Parses `<phrase> <syllable> <syllable> ...` lines. `#` starts a comment.
    ///
    /// Lines whose syllable count does not match the phrase length are skipped.
    pub fn parse(content: &str) -> Self {
        let mut table = Self::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let Some(phrase) = parts.next() else { continue };
            let reading = parts.collect::<Vec<_>>().join(" ");
            if !table.insert(phrase, &reading) {
                warn!("Skipping phrase at line {}: '{}'", line_num + 1, line);
            }
        }
        table
    }

    /// Adds or replaces a phrase. `reading` is whitespace separated, one
    /// syllable per character. Returns false if the counts disagree.
    pub fn insert(&mut self, phrase: &str, reading: &str) -> bool {
        let syllables: Vec<String> = reading.split_whitespace().map(to_v).collect();
        let len = phrase.chars().count();
        if len == 0 || syllables.len() != len {
            return false;
        }
        self.max_len = self.max_len.max(len);
        self.readings.insert(phrase.to_string(), syllables);
        true
    }

    /// Readings for the longest phrase (2+ characters) that `text` starts with.
    pub fn longest_match(&self, text: &[char]) -> Option<(usize, &[String])> {
        let upper = self.max_len.min(text.len());
        (2..=upper).rev().find_map(|len| {
            let key: String = text[..len].iter().collect();
            self.readings.get(&key).map(|r| (len, r.as_slice()))
        })
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Writes ü as v, the way pinyin input methods type it.
pub fn to_v(syllable: &str) -> String {
    syllable.replace('ü', "v")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn builtin_table_has_no_malformed_lines() {
        let entries = BUILTIN_PHRASES
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .count();
        assert_eq!(PhraseTable::builtin().len(), entries);
    }

    #[test]
    fn prefers_the_longest_phrase() {
        let mut table = PhraseTable::new();
        table.insert("水浒", "shui hu");
        table.insert("水浒传", "shui hu zhuan");

        let (len, reading) = table.longest_match(&chars("水浒传说")).unwrap();
        assert_eq!(len, 3);
        assert_eq!(reading, ["shui", "hu", "zhuan"]);
        assert!(table.longest_match(&chars("水")).is_none());
    }

    #[test]
    fn mismatched_readings_are_skipped() {
        let table = PhraseTable::parse("# comment\n银行 yin\n重庆 chong qing\n\n");
        assert_eq!(table.len(), 1);
        assert!(table.longest_match(&chars("银行")).is_none());
    }

    #[test]
    fn u_umlaut_is_stored_as_v() {
        let table = PhraseTable::parse("绿色 lü se");
        let (_, reading) = table.longest_match(&chars("绿色")).unwrap();
        assert_eq!(reading, ["lv", "se"]);
    }
}
