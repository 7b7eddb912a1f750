pub mod contract;

pub use crate::domain::model::WatchRecord;
pub use crate::domain::ports::{ConfigProvider, Contract, Ledger};
pub use crate::utils::error::Result;
