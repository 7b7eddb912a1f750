use crate::core::Ledger;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One file per key under a base directory. Stands in for the platform
/// world state when the contract runs under the CLI harness.
#[derive(Debug, Clone)]
pub struct FileLedger {
    base_path: String,
}

impl FileLedger {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        Path::new(&self.base_path).join(key)
    }
}

impl Ledger for FileLedger {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.key_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> Result<()> {
        let full_path = self.key_path(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_state_absent_key_is_none() {
        let dir = TempDir::new().unwrap();
        let ledger = FileLedger::new(dir.path().to_string_lossy().to_string());

        assert!(ledger.get_state("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get_roundtrips_bytes() {
        let dir = TempDir::new().unwrap();
        let ledger = FileLedger::new(dir.path().to_string_lossy().to_string());

        ledger.put_state("1", b"payload").await.unwrap();

        let stored = ledger.get_state("1").await.unwrap();
        assert_eq!(stored.unwrap(), b"payload");
    }

    #[tokio::test]
    async fn test_state_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().to_string_lossy().to_string();

        let first = FileLedger::new(base.clone());
        first.put_state("k", b"v").await.unwrap();

        let second = FileLedger::new(base);
        assert_eq!(second.get_state("k").await.unwrap().unwrap(), b"v");
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_value() {
        let dir = TempDir::new().unwrap();
        let ledger = FileLedger::new(dir.path().to_string_lossy().to_string());

        ledger.put_state("k", b"old").await.unwrap();
        ledger.put_state("k", b"new").await.unwrap();

        assert_eq!(ledger.get_state("k").await.unwrap().unwrap(), b"new");
    }
}
