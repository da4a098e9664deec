// File: src/core/converter.rs
use crate::core::config::FilterConfig;
use crate::core::phrases::{to_v, PhraseTable};
use pinyin::ToPinyin;

/// Splits text into per-character romanized readings.
pub trait Romanizer {
    fn syllables(&self, text: &str) -> Vec<String>;
}

/// Hanzi -> pinyin reader.
///
/// Phrases from the phrase table are matched longest-first, which settles
/// polyphones like 银行 or 重庆. Anything left over gets its most common
/// per-character reading. Readings are toneless with ü written as v. Runs
/// of characters without a reading are passed through as a single segment.
pub struct RomanizationEngine {
    phrases: PhraseTable,
}

impl RomanizationEngine {
    pub fn new() -> Self {
        Self::with_phrases(PhraseTable::builtin())
    }

    pub fn with_phrases(phrases: PhraseTable) -> Self {
        Self { phrases }
    }
}

impl Default for RomanizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Romanizer for RomanizationEngine {
    fn syllables(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut result = Vec::new();
        let mut passthrough = String::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((len, reading)) = self.phrases.longest_match(&chars[i..]) {
                if !passthrough.is_empty() {
                    result.push(std::mem::take(&mut passthrough));
                }
                result.extend(reading.iter().cloned());
                i += len;
                continue;
            }

            match chars[i].to_pinyin() {
                Some(reading) => {
                    if !passthrough.is_empty() {
                        result.push(std::mem::take(&mut passthrough));
                    }
                    result.push(to_v(reading.plain()));
                }
                None => passthrough.push(chars[i]),
            }
            i += 1;
        }

        if !passthrough.is_empty() {
            result.push(passthrough);
        }
        result
    }
}

/// The romanizer handed the text back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFailed(pub String);

/// Romanizes `title`, applies the fix table and joins with the separator.
///
/// A result identical to the input is treated as "nothing was converted".
pub fn romanize<R: Romanizer + ?Sized>(
    romanizer: &R,
    title: &str,
    config: &FilterConfig,
) -> Result<String, ConversionFailed> {
    let raw = romanizer.syllables(title);
    let syllables: Vec<&str> = raw
        .iter()
        .map(|s| config.pinyin_fixes.get(s).map_or(s.as_str(), String::as_str))
        .collect();
    let pinyin = syllables.join(&config.separator);

    if pinyin == title {
        return Err(ConversionFailed(pinyin));
    }
    Ok(pinyin)
}
