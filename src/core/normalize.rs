// File: src/core/normalize.rs
use zhconv::{zhconv, Variant};

/// Maps arbitrary text onto the canonical script form used for comparison
/// and output.
pub trait ScriptNormalizer {
    fn normalize(&self, text: &str) -> String;
}

/// Traditional -> simplified conversion backed by the OpenCC/MediaWiki tables
/// in `zhconv`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimplifiedNormalizer;

impl SimplifiedNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptNormalizer for SimplifiedNormalizer {
    fn normalize(&self, text: &str) -> String {
        zhconv(text, Variant::ZhHans)
    }
}

/// Leaves text untouched. Useful when the input is known to be simplified.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityNormalizer;

impl ScriptNormalizer for IdentityNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }
}
