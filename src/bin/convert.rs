// Usage: convert [OPTIONS] <INPUT>
// INPUT is a dump of article titles, one per line. Records go to stdout.
use clap::{ArgAction, Parser};
use dict_core::logging::{init_tracing, level_from_flags};
use dict_core::persistence::{load_excluded_titles, DEFAULT_EXCLUDE_PATH};
use dict_core::{DictResult, DictionaryEngine, FilterConfig};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

/// Filter article titles and emit `<title>\t<pinyin>\t0` dictionary records.
#[derive(Debug, Parser)]
#[command(name = "convert", version, about)]
struct Cli {
    /// File of article titles, one per line.
    input: PathBuf,
    /// Titles to skip, as produced by `exclude_titles`.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_EXCLUDE_PATH)]
    exclude: PathBuf,
    /// JSON file overriding filter settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Increase logging verbosity (-v, -vv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
    /// Only log warnings and errors.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(level_from_flags(cli.verbose, cli.quiet));

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> DictResult<()> {
    let config = match &cli.config {
        Some(path) => FilterConfig::from_file(path)?,
        None => FilterConfig::default(),
    };
    let excluded = load_excluded_titles(&cli.exclude)?;
    let engine = DictionaryEngine::new(config, excluded);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    engine.convert_file(&cli.input, &mut out)?;
    Ok(())
}
