// File: src/core/filter.rs
use crate::core::config::FilterConfig;
use std::fmt;

/// The first acceptance rule a title failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Empty, or contains anything outside the ideograph range.
    NotIdeographic,
    TooShort,
    ListPage,
    /// Starts with the previous accepted title.
    PrefixOfPrevious,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::NotIdeographic => "not purely ideographic",
            Rejection::TooShort => "too short",
            Rejection::ListPage => "list page",
            Rejection::PrefixOfPrevious => "extends previous title",
        };
        f.write_str(reason)
    }
}

/// Runs the acceptance rules in order and reports the first one that fails.
///
/// `title` must already be in canonical simplified form. Lengths are counted
/// in characters, not bytes.
pub fn check_title(
    title: &str,
    previous_title: Option<&str>,
    config: &FilterConfig,
) -> Result<(), Rejection> {
    if title.is_empty() || !title.chars().all(|c| config.is_ideograph(c)) {
        return Err(Rejection::NotIdeographic);
    }

    if title.chars().count() < config.min_length {
        return Err(Rejection::TooShort);
    }

    if config
        .list_page_endings
        .iter()
        .any(|ending| title.ends_with(ending.as_str()))
    {
        return Err(Rejection::ListPage);
    }

    if let Some(previous) = previous_title {
        if previous.chars().count() >= config.prefix_min_length && title.starts_with(previous) {
            return Err(Rejection::PrefixOfPrevious);
        }
    }

    Ok(())
}

pub fn is_good_title(title: &str, previous_title: Option<&str>, config: &FilterConfig) -> bool {
    check_title(title, previous_title, config).is_ok()
}
