use std::path::PathBuf;

use bank_core::{cli::run_cli, init, storage::JsonStore, utils};

fn main() {
    init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(utils::ledger_file);

    if let Err(err) = run_cli(JsonStore::new(path)) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
