use std::{
    fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::BankError;
use crate::ledger::{bank::CURRENT_SCHEMA_VERSION, Bank};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";
const BACKUP_SUFFIX: &str = "bak";

/// Stores the whole ledger as pretty-printed JSON in a single file.
///
/// Saves stage through a temporary file and rename, keeping one `.bak`
/// copy of the previous snapshot, so a failed write never corrupts the
/// state already on disk.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStore {
    fn save(&self, bank: &Bank) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if self.path.exists() {
            fs::copy(&self.path, suffixed(&self.path, BACKUP_SUFFIX))?;
        }
        let json = serde_json::to_string_pretty(bank)?;
        let tmp = suffixed(&self.path, TMP_SUFFIX);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "ledger saved");
        Ok(())
    }

    fn load(&self) -> Result<Bank> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no ledger file, starting empty");
            return Ok(Bank::new());
        }
        let data = fs::read_to_string(&self.path).map_err(|err| read_error(&self.path, err))?;
        let bank: Bank =
            serde_json::from_str(&data).map_err(|err| read_error(&self.path, err))?;
        if bank.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(BankError::Storage(format!(
                "ledger file `{}` is from a newer schema version ({})",
                self.path.display(),
                bank.schema_version
            )));
        }
        tracing::info!(
            path = %self.path.display(),
            accounts = bank.accounts.len(),
            "ledger loaded"
        );
        Ok(bank)
    }
}

fn read_error(path: &Path, err: impl fmt::Display) -> BankError {
    BankError::Storage(format!(
        "cannot read ledger file `{}`: {}",
        path.display(),
        err
    ))
}

fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut out = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{suffix}"),
        None => suffix.to_string(),
    };
    out.set_extension(ext);
    out
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("ledger.json"))
    }

    fn sample_bank() -> Bank {
        let mut bank = Bank::new();
        bank.add_client("Alice", 100).expect("add client");
        bank.deposit(100, 500.0).expect("deposit");
        bank
    }

    #[test]
    fn round_trip_preserves_balances_and_history() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let bank = sample_bank();
        store.save(&bank).expect("save");
        let loaded = store.load().expect("load");
        assert_eq!(loaded.clients, bank.clients);
        assert_eq!(loaded.accounts, bank.accounts);
    }

    #[test]
    fn missing_file_yields_empty_ledger() {
        let dir = TempDir::new().expect("temp dir");
        let bank = store_in(&dir).load().expect("first run");
        assert!(bank.clients.is_empty());
        assert!(bank.accounts.is_empty());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").expect("write garbage");
        let err = store.load().unwrap_err();
        assert!(matches!(err, BankError::Storage(_)));
    }

    #[test]
    fn newer_schema_is_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut bank = sample_bank();
        bank.schema_version = CURRENT_SCHEMA_VERSION + 1;
        store.save(&bank).expect("save");
        assert!(store.load().is_err());
    }

    #[test]
    fn save_keeps_a_backup_of_the_previous_file() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store.save(&sample_bank()).expect("first save");

        let mut bank = sample_bank();
        bank.add_client("Bob", 200).expect("add client");
        store.save(&bank).expect("second save");

        let backup = dir.path().join("ledger.json.bak");
        let raw = fs::read_to_string(backup).expect("backup exists");
        let snapshot: Bank = serde_json::from_str(&raw).expect("backup parses");
        assert!(snapshot.client(200).is_none());
    }
}
