use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;

use bet_evaluator::config::Config;
use bet_evaluator::dashboard::{self, AppState};
use bet_evaluator::EvaluationLedger;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;
    let default_sportsbook = config.sportsbook()?;
    info!("Default sportsbook: {}", default_sportsbook);

    // One ledger for the single local session; gone when the process exits
    let ledger = EvaluationLedger::with_warn_threshold(config.max_ledger_entries);
    let state = AppState::new(ledger, default_sportsbook);

    let app = dashboard::router(state);
    let addr: SocketAddr = config.dashboard_addr.parse()?;
    info!("Bet evaluator listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
