use clap::Parser;
use std::net::SocketAddr;

use crate::engine::Sportsbook;

/// Sports bet evaluator dashboard
#[derive(Parser, Debug, Clone)]
#[command(name = "bet-evaluator", version, about)]
pub struct Config {
    /// Dashboard listen address
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "127.0.0.1:8080")]
    pub dashboard_addr: String,

    /// Sportsbook preselected on a fresh form (DraftKings, FanDuel, BetMGM,
    /// Caesars, PointsBet, NoVig, or any custom label)
    #[arg(long, env = "DEFAULT_SPORTSBOOK", default_value = "DraftKings")]
    pub default_sportsbook: String,

    /// Ledger size past which each save logs a warning (records are kept)
    #[arg(long, env = "MAX_LEDGER_ENTRIES", default_value = "500")]
    pub max_ledger_entries: usize,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.dashboard_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "dashboard_addr must be a socket address such as 127.0.0.1:8080, got {:?}",
                self.dashboard_addr
            );
        }
        if self.default_sportsbook.trim().is_empty() {
            anyhow::bail!("default_sportsbook must not be empty");
        }
        if self.max_ledger_entries == 0 {
            anyhow::bail!("max_ledger_entries must be at least 1");
        }
        Ok(())
    }

    pub fn sportsbook(&self) -> anyhow::Result<Sportsbook> {
        Ok(self.default_sportsbook.parse()?)
    }
}
