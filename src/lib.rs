pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::FileLedger, CliConfig};

pub use core::contract::WatchContract;
pub use domain::model::WatchRecord;
pub use domain::ports::{Contract, Ledger};
pub use utils::error::{ContractError, Result};
