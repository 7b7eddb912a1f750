use crate::core::{Contract, Ledger, Result, WatchRecord};
use crate::utils::error::ContractError;
use async_trait::async_trait;

/// The operations the contract dispatches on. Wire names are the literal
/// function names the invocation layer passes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    InitLedger,
    QueryWatch,
    RecordWatch,
}

impl Operation {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "initLedger" => Ok(Self::InitLedger),
            "querywatch" => Ok(Self::QueryWatch),
            "recordwatch" => Ok(Self::RecordWatch),
            other => Err(ContractError::InvalidOperationError {
                name: other.to_string(),
            }),
        }
    }
}

pub struct WatchContract<L: Ledger> {
    ledger: L,
}

impl<L: Ledger> WatchContract<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    fn seed_records() -> Vec<WatchRecord> {
        vec![WatchRecord {
            name: "Avi".to_string(),
            timestamp: "1504054225".to_string(),
            qty: "25".to_string(),
            outlet: "Hadapsar".to_string(),
        }]
    }

    /// Writes the fixed seed data under keys "1", "2", ... Seed writes are
    /// unchecked: a rejected write is logged and initLedger still succeeds.
    async fn init_ledger(&self) -> Result<Vec<u8>> {
        for (i, record) in Self::seed_records().iter().enumerate() {
            let key = (i + 1).to_string();
            let bytes = serde_json::to_vec(record)?;
            match self.ledger.put_state(&key, &bytes).await {
                Ok(()) => tracing::debug!("Seeded {:?} under key {}", record, key),
                Err(e) => tracing::warn!("Seed write under key {} rejected: {}", key, e),
            }
        }
        Ok(Vec::new())
    }

    /// Looks up one watch by key and returns the stored bytes unchanged.
    async fn query_watch(&self, args: &[String]) -> Result<Vec<u8>> {
        if args.len() != 1 {
            return Err(ContractError::ArgumentCountError {
                operation: "querywatch",
                expected: 1,
                got: args.len(),
            });
        }

        let key = &args[0];
        match self.ledger.get_state(key).await? {
            Some(bytes) => Ok(bytes),
            None => Err(ContractError::NotFoundError { key: key.clone() }),
        }
    }

    /// Records one watch: args are key, name, qty, outlet, timestamp. The
    /// field values are stored as-is, full overwrite if the key exists.
    async fn record_watch(&self, args: &[String]) -> Result<Vec<u8>> {
        if args.len() != 5 {
            return Err(ContractError::ArgumentCountError {
                operation: "recordwatch",
                expected: 5,
                got: args.len(),
            });
        }

        let key = &args[0];
        let record = WatchRecord {
            name: args[1].clone(),
            timestamp: args[4].clone(),
            qty: args[2].clone(),
            outlet: args[3].clone(),
        };

        let bytes = serde_json::to_vec(&record)?;
        if let Err(e) = self.ledger.put_state(key, &bytes).await {
            tracing::warn!("Ledger rejected write under key {}: {}", key, e);
            return Err(ContractError::WriteError { key: key.clone() });
        }

        tracing::debug!("Recorded watch under key {}", key);
        Ok(Vec::new())
    }
}

#[async_trait]
impl<L: Ledger> Contract for WatchContract<L> {
    // Instantiation is a no-op; ledger seeding is the explicit initLedger
    // operation.
    async fn init(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    async fn invoke(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        tracing::debug!("Invoking {} with {} args", function, args.len());
        match Operation::parse(function)? {
            Operation::InitLedger => self.init_ledger().await,
            Operation::QueryWatch => self.query_watch(args).await,
            Operation::RecordWatch => self.record_watch(args).await,
        }
    }
}
