use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn bank_cli(path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bank_core_cli").expect("binary builds");
    cmd.env("BANK_CORE_CLI_SCRIPT", "1").arg(path);
    cmd
}

#[test]
fn script_mode_runs_the_full_menu_flow() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ledger.json");

    let input = "1\nAlice\n100\n2\n100\n500\n1\nBob\n200\n4\n100\n200\n200\n5\n100\n7\n";
    bank_cli(&path)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Your account number is 100"))
        .stdout(contains("Balance: $300.00"))
        .stdout(contains("Transfer to 200"))
        .stdout(contains("Ledger saved"));

    let json = std::fs::read_to_string(&path).expect("ledger written");
    assert!(json.contains("\"Alice\""));
    assert!(json.contains("\"Bob\""));
}

#[test]
fn unknown_menu_choice_warns_and_continues() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ledger.json");

    bank_cli(&path)
        .write_stdin("9\n7\n")
        .assert()
        .success()
        .stdout(contains("Unknown choice"));
}

#[test]
fn insufficient_funds_is_reported_not_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ledger.json");

    bank_cli(&path)
        .write_stdin("1\nAlice\n100\n3\n100\n50\n7\n")
        .assert()
        .success()
        .stdout(contains("insufficient funds"));
}

#[test]
fn malformed_date_warns_and_returns_to_the_menu() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ledger.json");

    bank_cli(&path)
        .write_stdin("1\nAlice\n100\n6\n100\nnot-a-date\n7\n")
        .assert()
        .success()
        .stdout(contains("invalid date"));
}

#[test]
fn corrupt_ledger_file_aborts_instead_of_starting_empty() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "{ not json").expect("write garbage");

    bank_cli(&path)
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(contains("cannot read ledger file"));
}
