use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use qtrim::oracle::PubmedOracle;
use qtrim::{analyze, optimize, output};

#[derive(Parser)]
#[command(name = "qtrim")]
#[command(about = "Trims redundant terms from boolean search queries by re-measuring result counts")]
#[command(version)]
struct Cli {
    /// Search query (AND/OR with parentheses)
    #[arg(trailing_var_arg = true, required = true)]
    query: Vec<String>,

    /// Base URL of the search service results page
    #[arg(long, default_value = "https://pubmed.ncbi.nlm.nih.gov/")]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Transport retries per measurement
    #[arg(long, default_value_t = 2)]
    retries: u32,

    /// Only analyze the query; do not contact the search service
    #[arg(long)]
    dry_run: bool,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let raw_query = cli.query.join(" ");
    let (search_query, keywords) = analyze(&raw_query);

    if cli.dry_run {
        if cli.json {
            let analysis = serde_json::json!({
                "query": search_query,
                "keywords": keywords,
            });
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            output::print_analysis(&search_query, &keywords, !cli.no_color)?;
        }
        return Ok(());
    }

    let oracle = PubmedOracle::new(Duration::from_secs(cli.timeout), cli.retries)?
        .with_base_url(&cli.base_url);
    let report = optimize(&oracle, &search_query, &keywords)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report, !cli.no_color)?;
    }
    Ok(())
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
