use std::fs;

use bank_core::{
    ledger::Bank,
    storage::{JsonStore, StorageBackend},
};
use tempfile::TempDir;

#[test]
fn failed_staging_write_preserves_the_original_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ledger.json");
    let store = JsonStore::new(&path);

    let mut bank = Bank::new();
    bank.add_client("Alice", 100).expect("add client");
    store.save(&bank).expect("initial save");
    let original = fs::read_to_string(&path).expect("read original");

    // Collide with the staging file name so the next write fails.
    fs::create_dir_all(dir.path().join("ledger.json.tmp")).expect("block tmp path");
    bank.add_client("Bob", 200).expect("add client");
    assert!(store.save(&bank).is_err());

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(
        current, original,
        "a failed save must not corrupt the previous snapshot"
    );
}

#[test]
fn timestamps_and_balances_round_trip_at_full_precision() {
    let dir = TempDir::new().expect("temp dir");
    let store = JsonStore::new(dir.path().join("ledger.json"));

    let mut bank = Bank::new();
    bank.add_client("Alice", 100).expect("add client");
    bank.deposit(100, 0.1).expect("deposit");
    bank.deposit(100, 0.2).expect("deposit");

    store.save(&bank).expect("save");
    let loaded = store.load().expect("load");

    let saved = &bank.account(100).expect("account").transactions;
    let restored = &loaded.account(100).expect("account").transactions;
    assert_eq!(saved, restored);
    assert_eq!(
        loaded.account(100).expect("account").balance,
        bank.account(100).expect("account").balance
    );
}
