use dialoguer::{Confirm, Input, Password};

/// Possible errors when asking the operator for input.
#[derive(thiserror::Error, Debug)]
pub enum PromptError {
    /// Terminal interaction failed.
    #[error("cannot interact with the terminal: {0}")]
    Terminal(#[from] dialoguer::Error),
}

/// Asks the operator questions.
pub trait Prompter {
    /// Asks a yes/no question, the default answer is "no".
    fn confirm(&self, prompt: &str) -> Result<bool, PromptError>;

    /// Asks for a non-empty text value.
    fn ask(&self, prompt: &str) -> Result<String, PromptError>;

    /// Asks for a non-empty value without echoing it.
    fn ask_secret(&self, prompt: &str) -> Result<String, PromptError>;
}

/// [`Prompter`] that talks to the operator through the terminal.
#[derive(Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, PromptError> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    fn ask(&self, prompt: &str) -> Result<String, PromptError> {
        let error = format!("{prompt} cannot be empty.");
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(move |value: &String| if value.trim().is_empty() { Err(error.clone()) } else { Ok(()) })
            .interact_text()?)
    }

    fn ask_secret(&self, prompt: &str) -> Result<String, PromptError> {
        let error = format!("{prompt} cannot be empty.");
        Ok(Password::new()
            .with_prompt(prompt)
            .validate_with(move |value: &String| if value.trim().is_empty() { Err(error.clone()) } else { Ok(()) })
            .interact()?)
    }
}
