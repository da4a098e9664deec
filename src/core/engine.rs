use crate::core::config::FilterConfig;
use crate::core::converter::{romanize, ConversionFailed, RomanizationEngine, Romanizer};
use crate::core::filter::{check_title, Rejection};
use crate::core::normalize::{ScriptNormalizer, SimplifiedNormalizer};
use crate::core::phrases::PhraseTable;
use crate::core::types::{ExclusionSet, Record};
use crate::error::{DictError, DictResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// State threaded from one input line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    /// Last title that produced a record.
    pub previous_title: Option<String>,
    /// Number of records emitted so far.
    pub accepted: usize,
}

/// What happened to a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Excluded(String),
    Rejected { title: String, reason: Rejection },
    ConversionFailed(String),
    Emitted(Record),
}

/// Turns a stream of titles into dictionary records.
pub struct DictionaryEngine {
    pub config: FilterConfig,
    pub excluded: ExclusionSet,
    normalizer: Box<dyn ScriptNormalizer>,
    romanizer: Box<dyn Romanizer>,
}

impl DictionaryEngine {
    pub fn new(config: FilterConfig, excluded: ExclusionSet) -> Self {
        let mut phrases = PhraseTable::builtin();
        for (phrase, reading) in &config.phrase_readings {
            if !phrases.insert(phrase, reading) {
                warn!("Ignoring phrase reading '{}' for '{}'", reading, phrase);
            }
        }
        Self::with_components(
            config,
            excluded,
            Box::new(SimplifiedNormalizer::new()),
            Box::new(RomanizationEngine::with_phrases(phrases)),
        )
    }

    pub fn with_components(
        config: FilterConfig,
        excluded: ExclusionSet,
        normalizer: Box<dyn ScriptNormalizer>,
        romanizer: Box<dyn Romanizer>,
    ) -> Self {
        Self { config, excluded, normalizer, romanizer }
    }

    /// Processes one raw input line against `state`.
    ///
    /// The returned state only differs from the input when a record was
    /// emitted.
    pub fn step(&self, state: RunState, line: &str) -> (RunState, Outcome) {
        let title = self.normalizer.normalize(line.trim());

        if self.excluded.contains(&title) {
            return (state, Outcome::Excluded(title));
        }

        if let Err(reason) = check_title(&title, state.previous_title.as_deref(), &self.config) {
            return (state, Outcome::Rejected { title, reason });
        }

        match romanize(self.romanizer.as_ref(), &title, &self.config) {
            Err(ConversionFailed(pinyin)) => (state, Outcome::ConversionFailed(pinyin)),
            Ok(pinyin) => {
                let next = RunState {
                    previous_title: Some(title.clone()),
                    accepted: state.accepted + 1,
                };
                (next, Outcome::Emitted(Record::new(title, pinyin)))
            }
        }
    }

    /// Converts every line of `input`, writing one record per accepted title
    /// to `out`. Returns the final state.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> DictResult<RunState> {
        let state = input.lines().try_fold(RunState::default(), |state, line| {
            let line = line.map_err(DictError::Input)?;
            let (state, outcome) = self.step(state, &line);
            self.report(&state, outcome, out)?;
            Ok::<_, DictError>(state)
        })?;

        out.flush().map_err(DictError::Output)?;
        log_count(state.accepted);
        Ok(state)
    }

    pub fn convert_file<W: Write>(&self, path: &Path, out: &mut W) -> DictResult<RunState> {
        let file = File::open(path).map_err(|e| DictError::io(path, e))?;
        self.run(BufReader::new(file), out)
    }

    fn report<W: Write>(&self, state: &RunState, outcome: Outcome, out: &mut W) -> DictResult<()> {
        match outcome {
            Outcome::Excluded(title) => debug!("Excluded title: {}", title),
            Outcome::Rejected { title, reason } => trace!("Rejected {}: {}", title, reason),
            Outcome::ConversionFailed(pinyin) => {
                info!("Failed to convert to Pinyin. Ignoring: {}", pinyin)
            }
            Outcome::Emitted(record) => {
                writeln!(out, "{}", record).map_err(DictError::Output)?;
                let every = self.config.log_every;
                if every > 0 && state.accepted % every == 0 {
                    log_count(state.accepted);
                }
            }
        }
        Ok(())
    }
}

fn log_count(count: usize) {
    info!("{} words generated", count);
}
