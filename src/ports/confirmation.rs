use crate::domain::AppError;

/// Yes/no question put to the user before a destructive step.
pub trait Confirmation {
    /// `Ok(None)` means the user dismissed the prompt without answering.
    fn confirm(&self, prompt: &str) -> Result<Option<bool>, AppError>;
}
