use serde::{Deserialize, Serialize};

/// The four-field watch record stored on the ledger. All fields stay strings:
/// `timestamp` carries epoch seconds as text and `qty` a decimal as text,
/// exactly as submitted. The module never checks they parse as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchRecord {
    pub name: String,
    pub timestamp: String,
    pub qty: String,
    pub outlet: String,
}
