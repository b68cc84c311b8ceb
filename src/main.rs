use clap::Parser;

use shopgrid::config::CONFIG;
use shopgrid::engine::Engine;
use shopgrid::error::ScrapeError;
use shopgrid::fetcher::HttpFetcher;
use shopgrid::query::QueryBuilder;
use shopgrid::render;

/// Search shopping.com and print either the total number of results or the
/// products listed on one results page.
#[derive(Parser, Debug)]
#[command(name = "shopgrid", version)]
struct Cli {
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Search keywords, optionally followed by a page number
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let engine = Engine::new(QueryBuilder::new(CONFIG.host.as_str()), HttpFetcher::from_config()?);

    match engine.run(&cli.tokens).await {
        Ok(outcome) => {
            if cli.json {
                println!("{}", render::to_json(&outcome)?);
            } else {
                println!("{}", render::to_text(&outcome));
            }
        }
        Err(e @ ScrapeError::InvalidArgument(_)) => {
            println!("{}", e);
            println!("{}", render::USAGE);
        }
        Err(e) if e.is_handled() => println!("{}", e),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
