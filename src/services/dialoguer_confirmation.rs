use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError};

use crate::domain::AppError;
use crate::ports::Confirmation;

/// Terminal yes/no prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerConfirmation;

impl Confirmation for DialoguerConfirmation {
    fn confirm(&self, prompt: &str) -> Result<Option<bool>, AppError> {
        match Confirm::new().with_prompt(prompt).default(false).interact_opt() {
            Ok(answer) => Ok(answer),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Prompt(format!(
                "{}. Re-run with --yes to skip the confirmation.",
                err
            ))),
        }
    }
}
