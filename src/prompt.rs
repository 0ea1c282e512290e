//! Interactive prompts used by setup and the review loop.
//!
//! The session only talks to the [`Prompter`] trait; [`TerminalPrompter`]
//! implements it on top of `inquire`.

use crate::error::{Result, VidsweepError};
use crate::review::decision::Decision;
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, InquireError, Select, Text};
use std::path::{Path, PathBuf};

pub trait Prompter {
    fn confirm(&mut self, title: &str, question: &str) -> Result<bool>;

    /// `None` when the user cancels.
    fn open_file(&mut self, title: &str) -> Result<Option<PathBuf>>;

    /// `None` when the user cancels.
    fn select_directory(&mut self, title: &str) -> Result<Option<PathBuf>>;

    fn decision(&mut self, display_name: &str) -> Result<Decision>;

    fn notify_completion(&mut self);
}

fn prompt_error(e: InquireError) -> VidsweepError {
    VidsweepError::Prompt(e.to_string())
}

fn existing_path(input: &str, want_dir: bool) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let path = Path::new(trimmed);
    let ok = if want_dir { path.is_dir() } else { path.is_file() };
    ok.then(|| path.to_path_buf())
}

pub struct TerminalPrompter;

impl TerminalPrompter {
    fn ask_path(title: &str, want_dir: bool) -> Result<Option<PathBuf>> {
        let kind = if want_dir { "directory" } else { "file" };
        let answer = Text::new(title)
            .with_help_message(&format!("Enter a {} path, leave empty to cancel", kind))
            .with_validator(move |input: &str| -> std::result::Result<Validation, CustomUserError> {
                if input.trim().is_empty() || existing_path(input, want_dir).is_some() {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(format!("Not an existing {}", kind).into()))
                }
            })
            .prompt_skippable()
            .map_err(prompt_error)?;

        Ok(answer.and_then(|a| existing_path(&a, want_dir)))
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, title: &str, question: &str) -> Result<bool> {
        println!("\n{}", title);
        Confirm::new(question)
            .with_default(true)
            .prompt()
            .map_err(prompt_error)
    }

    fn open_file(&mut self, title: &str) -> Result<Option<PathBuf>> {
        Self::ask_path(title, false)
    }

    fn select_directory(&mut self, title: &str) -> Result<Option<PathBuf>> {
        Self::ask_path(title, true)
    }

    fn decision(&mut self, display_name: &str) -> Result<Decision> {
        let choices = vec![Decision::MarkSeen, Decision::Delete, Decision::Skip];
        let message = format!("What do you want to do with: {}", display_name);
        match Select::new(&message, choices).prompt() {
            Ok(decision) => Ok(decision),
            Err(InquireError::OperationCanceled) => Ok(Decision::NoAction),
            Err(e) => Err(prompt_error(e)),
        }
    }

    fn notify_completion(&mut self) {
        println!("\n🎉 No more unseen videos available.");
    }
}
