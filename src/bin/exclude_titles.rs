// Fetches the misspelling-redirect category and writes it as an exclusion
// list for `convert`.
use clap::{ArgAction, Parser};
use dict_core::core::normalize::SimplifiedNormalizer;
use dict_core::logging::{init_tracing, level_from_flags};
use dict_core::persistence::{save_excluded_titles, DEFAULT_EXCLUDE_PATH};
use dict_core::wiki::{fetch_excluded_titles, WikiClient, DEFAULT_API_ENDPOINT, DEFAULT_CATEGORY};
use dict_core::DictResult;
use std::path::PathBuf;
use std::process;
use tracing::info;

/// Build the exclusion list from a wiki category.
#[derive(Debug, Parser)]
#[command(name = "exclude_titles", version, about)]
struct Cli {
    /// Where to write the list.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_EXCLUDE_PATH)]
    output: PathBuf,
    /// MediaWiki API endpoint.
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    endpoint: String,
    /// Category whose members are excluded.
    #[arg(long, default_value = DEFAULT_CATEGORY)]
    category: String,
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
    let client = WikiClient::new(cli.endpoint)?;
    let excluded = fetch_excluded_titles(&client, &cli.category, &SimplifiedNormalizer::new())?;
    save_excluded_titles(&excluded, &cli.output)?;
    info!("Wrote {} titles to {}", excluded.len(), cli.output.display());
    Ok(())
}
