use std::env;

use crate::errors::BankError;
use crate::ledger::Bank;
use crate::storage::{JsonStore, StorageBackend};

use super::{
    format,
    io::Prompter,
    menu::{self, MenuChoice},
    output, CliError,
};

/// How the shell sources its input.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CliMode {
    Interactive,
    Script,
}

enum LoopControl {
    Continue,
    Exit,
}

struct ShellContext {
    bank: Bank,
    store: JsonStore,
    prompter: Prompter,
}

/// Loads the ledger and runs the menu loop until save-and-exit, end of
/// input, or an interrupt. Only save-and-exit persists the ledger.
pub fn run_cli(store: JsonStore) -> Result<(), CliError> {
    let mode = if env::var_os("BANK_CORE_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let bank = store.load()?;
    let prompter = match mode {
        CliMode::Interactive => Prompter::interactive(),
        CliMode::Script => Prompter::Script,
    };
    let mut context = ShellContext {
        bank,
        store,
        prompter,
    };

    loop {
        let choice = match menu::read_choice(&context.prompter) {
            Ok(Some(choice)) => choice,
            Ok(None) => continue,
            Err(CliError::Interrupted) => {
                output::info("Exiting without saving.");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        match dispatch(&mut context, choice) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => return Ok(()),
            Err(CliError::Interrupted) => {
                output::info("Exiting without saving.");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}

fn dispatch(context: &mut ShellContext, choice: MenuChoice) -> Result<LoopControl, CliError> {
    match choice {
        MenuChoice::AddClient => add_client(context),
        MenuChoice::Deposit => deposit(context),
        MenuChoice::Withdraw => withdraw(context),
        MenuChoice::Transfer => transfer(context),
        MenuChoice::AccountInfo => account_info(context),
        MenuChoice::TransactionHistory => transaction_history(context),
        MenuChoice::SaveAndExit => save_and_exit(context),
    }
}

fn add_client(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let name = context.prompter.text("Client name")?;
    let Some(number) = context.prompter.account_number("Account number")? else {
        return Ok(LoopControl::Continue);
    };
    match context.bank.add_client(name.trim(), number) {
        Ok(number) => output::success(format!(
            "Account created. Your account number is {number}."
        )),
        Err(err) => report(err),
    }
    Ok(LoopControl::Continue)
}

fn deposit(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let Some(number) = context.prompter.account_number("Account number")? else {
        return Ok(LoopControl::Continue);
    };
    let Some(amount) = context.prompter.amount("Amount to deposit")? else {
        return Ok(LoopControl::Continue);
    };
    match context.bank.deposit(number, amount) {
        Ok(()) => output::success("Deposit recorded."),
        Err(err) => report(err),
    }
    Ok(LoopControl::Continue)
}

fn withdraw(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let Some(number) = context.prompter.account_number("Account number")? else {
        return Ok(LoopControl::Continue);
    };
    let Some(amount) = context.prompter.amount("Amount to withdraw")? else {
        return Ok(LoopControl::Continue);
    };
    match context.bank.withdraw(number, amount) {
        Ok(()) => output::success("Withdrawal recorded."),
        Err(err) => report(err),
    }
    Ok(LoopControl::Continue)
}

fn transfer(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let Some(from) = context.prompter.account_number("Sender account number")? else {
        return Ok(LoopControl::Continue);
    };
    let Some(to) = context.prompter.account_number("Recipient account number")? else {
        return Ok(LoopControl::Continue);
    };
    let Some(amount) = context.prompter.amount("Amount to transfer")? else {
        return Ok(LoopControl::Continue);
    };
    match context.bank.transfer(from, to, amount) {
        Ok(()) => output::success("Transfer completed."),
        Err(err) => report(err),
    }
    Ok(LoopControl::Continue)
}

fn account_info(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let Some(number) = context.prompter.account_number("Account number")? else {
        return Ok(LoopControl::Continue);
    };
    match context.bank.account_summary(number) {
        Ok(summary) => format::print_summary(&summary),
        Err(err) => report(err),
    }
    Ok(LoopControl::Continue)
}

fn transaction_history(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let Some(number) = context.prompter.account_number("Account number")? else {
        return Ok(LoopControl::Continue);
    };
    let Some(start) = context.prompter.date("Start date")? else {
        return Ok(LoopControl::Continue);
    };
    let Some(end) = context.prompter.date("End date")? else {
        return Ok(LoopControl::Continue);
    };
    match context.bank.transactions_between(number, start, end) {
        Ok(rows) => {
            output::section("Transactions in the period");
            format::print_transactions(rows.iter().copied());
        }
        Err(err) => report(err),
    }
    Ok(LoopControl::Continue)
}

fn save_and_exit(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    context.store.save(&context.bank)?;
    output::success(format!(
        "Ledger saved to {}.",
        context.store.path().display()
    ));
    Ok(LoopControl::Exit)
}

/// Expected ledger conditions become warnings and the loop continues;
/// storage failures never pass through here.
fn report(err: BankError) {
    output::warning(err);
}
