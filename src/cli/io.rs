use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::output;
use crate::cli::CliError;

/// Source of user answers. `Ok(None)` means the user is gone (end of input or cancel).
pub trait PromptSource {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>, CliError>;
    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError>;
}

/// Terminal prompts rendered with dialoguer.
pub struct InteractivePrompts {
    theme: ColorfulTheme,
}

impl InteractivePrompts {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for InteractivePrompts {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptSource for InteractivePrompts {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>, CliError> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_opt()?)
    }
}

/// Line-oriented answers read from any buffered reader, one answer per line.
pub struct ScriptPrompts<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompts<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl<R: BufRead> PromptSource for ScriptPrompts<R> {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        output::prompt(format!("{prompt}:"));
        self.next_line()
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>, CliError> {
        for (idx, item) in items.iter().enumerate() {
            output::block(format!("{}. {}", idx + 1, item));
        }
        loop {
            output::prompt(format!("{prompt} (1-{}):", items.len()));
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=items.len()).contains(&choice) => return Ok(Some(choice - 1)),
                _ => output::warning(format!(
                    "Invalid choice `{}`. Enter a number between 1 and {}.",
                    line.trim(),
                    items.len()
                )),
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError> {
        loop {
            output::prompt(format!("{prompt} (y/n):"));
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "" | "n" | "no" => return Ok(Some(false)),
                other => output::warning(format!("Please answer 'y' or 'n' (got `{other}`).")),
            }
        }
    }
}
