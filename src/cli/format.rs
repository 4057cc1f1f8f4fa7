use crate::ledger::{AccountSummary, Transaction};

use super::output;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn print_summary(summary: &AccountSummary<'_>) {
    output::section(format!("Account {}", summary.number));
    output::info(format!("Owner: {}", summary.client_name));
    output::info(format!("Balance: {}", money(summary.balance)));
    output::info("Transactions:");
    print_transactions(summary.transactions.iter());
}

pub fn print_transactions<'a>(transactions: impl Iterator<Item = &'a Transaction>) {
    let mut any = false;
    for txn in transactions {
        any = true;
        output::info(format!(
            "  {}  {:>12}  {}",
            txn.timestamp.format(TIMESTAMP_FORMAT),
            money(txn.amount),
            txn.kind
        ));
    }
    if !any {
        output::info("  (no transactions)");
    }
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}
