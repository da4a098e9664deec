//! End-to-end runs of the title pipeline over files on disk.

use std::fs;
use tempfile::TempDir;

use dict_core::core::converter::Romanizer;
use dict_core::core::normalize::IdentityNormalizer;
use dict_core::core::types::ExclusionSet;
use dict_core::persistence::load_excluded_titles;
use dict_core::{DictError, DictionaryEngine, FilterConfig};

const SAMPLE: &str = "测试\n测试列表\n测\n测试ABC\n";

fn run_with_exclusions(dir: &TempDir, exclusions: Option<&str>) -> String {
    let input = dir.path().join("titles.txt");
    fs::write(&input, SAMPLE).expect("write input");

    let exclude = dir.path().join("exclude_titles.txt");
    if let Some(content) = exclusions {
        fs::write(&exclude, content).expect("write exclusions");
    }

    let excluded = load_excluded_titles(&exclude).expect("load exclusions");
    let engine = DictionaryEngine::new(FilterConfig::default(), excluded);
    let mut out = Vec::new();
    engine.convert_file(&input, &mut out).expect("convert");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn only_clean_titles_become_records() {
    let dir = TempDir::new().unwrap();
    let output = run_with_exclusions(&dir, None);
    assert_eq!(output, "测试\tce'shi\t0\n");
}

#[test]
fn excluded_titles_produce_nothing() {
    let dir = TempDir::new().unwrap();
    let output = run_with_exclusions(&dir, Some("测试\n"));
    assert_eq!(output, "");
}

#[test]
fn traditional_input_is_emitted_simplified() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.txt");
    fs::write(&input, "  測試  \n中國\n").unwrap();

    let engine = DictionaryEngine::new(FilterConfig::default(), ExclusionSet::new());
    let mut out = Vec::new();
    let state = engine.convert_file(&input, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "测试\tce'shi\t0\n中国\tzhong'guo\t0\n");
    assert_eq!(state.accepted, 2);
    assert_eq!(state.previous_title.as_deref(), Some("中国"));
}

#[test]
fn traditional_exclusion_entries_do_not_match() {
    // the loader does not normalize, so a hand-written traditional entry
    // misses its simplified counterpart
    let dir = TempDir::new().unwrap();
    let output = run_with_exclusions(&dir, Some("測試\n"));
    assert_eq!(output, "测试\tce'shi\t0\n");
}

/// Echoes titles starting with 嗯 back unchanged, reads the rest as "x".
struct Flaky;

impl Romanizer for Flaky {
    fn syllables(&self, text: &str) -> Vec<String> {
        if text.starts_with('嗯') {
            vec![text.to_string()]
        } else {
            text.chars().map(|_| "x".to_string()).collect()
        }
    }
}

#[test]
fn failed_conversion_does_not_become_previous_title() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.txt");
    // 北京大学 stays the previous title across the failed 嗯嗯嗯嗯, so the
    // following extension is still suppressed
    fs::write(&input, "北京大学\n嗯嗯嗯嗯\n北京大学图书馆\n").unwrap();

    let engine = DictionaryEngine::with_components(
        FilterConfig::default(),
        ExclusionSet::new(),
        Box::new(IdentityNormalizer),
        Box::new(Flaky),
    );
    let mut out = Vec::new();
    let state = engine.convert_file(&input, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "北京大学\tx'x'x'x\t0\n");
    assert_eq!(state.accepted, 1);
    assert_eq!(state.previous_title.as_deref(), Some("北京大学"));
}

#[test]
fn missing_input_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    let engine = DictionaryEngine::new(FilterConfig::default(), ExclusionSet::new());
    let err = engine
        .convert_file(&dir.path().join("missing.txt"), &mut Vec::new())
        .unwrap_err();
    assert!(matches!(err, DictError::Io { .. }));
}
