#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "watch-ledger")]
#[command(about = "CLI harness for the watch record smart contract")]
pub struct CliConfig {
    /// Operation name: initLedger, querywatch or recordwatch
    pub function: String,

    /// String arguments for the operation, in order
    pub args: Vec<String>,

    #[arg(long, default_value = "./ledger")]
    pub ledger_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn ledger_path(&self) -> &str {
        &self.ledger_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("ledger_path", &self.ledger_path)
    }
}
