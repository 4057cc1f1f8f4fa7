mod format;
mod io;
mod menu;
pub mod output;
mod shell;

use thiserror::Error;

use crate::errors::BankError;

pub use shell::run_cli;

/// Fatal shell-level failures. Expected ledger conditions never surface
/// here; the handlers render those and keep the loop running.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BankError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("interrupted")]
    Interrupted,
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io_err)
                if io_err.kind() == std::io::ErrorKind::Interrupted =>
            {
                CliError::Interrupted
            }
            dialoguer::Error::IO(io_err) => CliError::Io(io_err),
        }
    }
}
