use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use profile_search::config::CONFIG;
use profile_search::input::next_submission;
use profile_search::{HttpTransport, SearchClient, TerminalUi};

/// Look up social media profiles for a username through the search API.
#[derive(Parser, Debug)]
#[command(name = "profile-search", version)]
struct Cli {
    /// Username to search for. Reads one username per line from stdin when omitted.
    username: Option<String>,

    /// Base URL of the search API (overrides API_BASE_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Only search these sites (repeatable)
    #[arg(long = "site")]
    sites: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(CONFIG.max_level())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let base_url = cli.api_url.as_deref().unwrap_or(&CONFIG.api_base_url);
    let transport = HttpTransport::new(base_url).context("Failed to configure search API")?;
    tracing::info!("using search endpoint {}", transport.endpoint());

    let client = SearchClient::new(transport, TerminalUi).with_sites(cli.sites);

    if let Some(username) = cli.username {
        client.on_submit(&username).await;
        return Ok(());
    }

    let mut stdin = BufReader::new(tokio::io::stdin());
    while let Some(line) = next_submission(&mut stdin).await? {
        client.on_submit(&line).await;
    }
    Ok(())
}
