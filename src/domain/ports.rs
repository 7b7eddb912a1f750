use crate::utils::error::Result;
use async_trait::async_trait;

/// Key-value world state supplied by the host platform. Absent keys are
/// `Ok(None)`, not errors; the contract decides what absence means.
pub trait Ledger: Send + Sync {
    fn get_state(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn put_state(
        &self,
        key: &str,
        value: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn ledger_path(&self) -> &str;
}

/// Invocation boundary the host platform calls into: `init` once at
/// instantiation, `invoke` once per transaction with an operation name and
/// its string arguments. Success is a raw payload; failure is the error
/// message returned to the caller.
#[async_trait]
pub trait Contract: Send + Sync {
    async fn init(&self) -> Result<Vec<u8>>;
    async fn invoke(&self, function: &str, args: &[String]) -> Result<Vec<u8>>;
}
