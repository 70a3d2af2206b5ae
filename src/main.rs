use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tickerdeck::market::runtime::start_market;
use tickerdeck::tui::run::run_tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stderr so log lines never land inside the alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("starting tickerdeck");

    let (market, board) = start_market(Duration::from_secs(1));
    let res = run_tui(&market, board).await;
    drop(market);

    info!("exiting");
    res
}
