//! Prompt abstraction over the terminal.
//!
//! Interactive flows ask questions through this trait instead of calling
//! dialoguer directly, so the selector can run against a scripted
//! implementation in tests.

use dialoguer::{Confirm, MultiSelect, Select, theme::ColorfulTheme};
use eyre::{Context, Result};

/// A blocking question-and-answer capability.
pub trait Prompt {
    /// Pick one item; returns its index.
    fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize>;

    /// Pick any number of items from a pre-checked list; returns the checked indices.
    fn multi_select(&mut self, message: &str, items: &[String], checked: &[bool]) -> Result<Vec<usize>>;

    /// Yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Terminal implementation backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()
            .wrap_err("Failed to get selection")
    }

    fn multi_select(&mut self, message: &str, items: &[String], checked: &[bool]) -> Result<Vec<usize>> {
        MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(items)
            .defaults(checked)
            .interact()
            .wrap_err("Failed to get checklist selection")
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(default)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}
