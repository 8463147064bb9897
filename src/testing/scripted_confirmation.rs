use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::Confirmation;

/// Confirmation returning a fixed answer and recording the prompts shown.
pub struct ScriptedConfirmation {
    answer: Option<bool>,
    pub prompts: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedConfirmation {
    pub fn answering(answer: Option<bool>) -> Self {
        Self { answer, prompts: RefCell::new(Vec::new()) }
    }

    pub fn was_asked(&self) -> bool {
        !self.prompts.borrow().is_empty()
    }
}

impl Confirmation for ScriptedConfirmation {
    fn confirm(&self, prompt: &str) -> Result<Option<bool>, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.answer)
    }
}
