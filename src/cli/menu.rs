use dialoguer::Select;

use super::{io::Prompter, output, CliError};

/// The seven ledger operations offered by the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddClient,
    Deposit,
    Withdraw,
    Transfer,
    AccountInfo,
    TransactionHistory,
    SaveAndExit,
}

const ENTRIES: [(MenuChoice, &str); 7] = [
    (MenuChoice::AddClient, "Add client"),
    (MenuChoice::Deposit, "Deposit"),
    (MenuChoice::Withdraw, "Withdraw"),
    (MenuChoice::Transfer, "Transfer"),
    (MenuChoice::AccountInfo, "Show account info"),
    (MenuChoice::TransactionHistory, "Transactions in a period"),
    (MenuChoice::SaveAndExit, "Save and exit"),
];

/// Shows the menu and reads one choice. `None` means the input was not a
/// recognized option and the shell should come back around.
pub fn read_choice(prompter: &Prompter) -> Result<Option<MenuChoice>, CliError> {
    match prompter {
        Prompter::Interactive(theme) => {
            let labels: Vec<&str> = ENTRIES.iter().map(|(_, label)| *label).collect();
            let index = Select::with_theme(theme)
                .with_prompt("Simple banking")
                .items(&labels)
                .default(0)
                .interact()
                .map_err(CliError::from)?;
            Ok(Some(ENTRIES[index].0))
        }
        Prompter::Script => {
            output::section("Simple banking");
            for (index, (_, label)) in ENTRIES.iter().enumerate() {
                output::info(format!("{}. {}", index + 1, label));
            }
            let raw = prompter.text("Your choice")?;
            match raw.trim().parse::<usize>() {
                Ok(choice) if (1..=ENTRIES.len()).contains(&choice) => {
                    Ok(Some(ENTRIES[choice - 1].0))
                }
                _ => {
                    output::warning(format!("Unknown choice `{}`.", raw.trim()));
                    Ok(None)
                }
            }
        }
    }
}
