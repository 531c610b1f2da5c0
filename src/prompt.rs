//! User input and interaction handling.
//! Asks the single-select questions that make up a [`ProjectConfig`], unless
//! the answer was already given on the command line.

use crate::config::{
    validate_name, Choice, Database, Linter, Orm, ProjectConfig, TestFramework, DOCKER_DEFAULT,
    DOCKER_PROMPT,
};
use crate::error::{Error, Result};
use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;

const YES_NO: [&str; 2] = ["Yes", "No"];

/// Trait for asking the user to pick one item out of a list.
pub trait Prompter {
    /// Shows `items` under `prompt` with `default` preselected.
    ///
    /// # Returns
    /// * `Result<usize>` - Index of the chosen item
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
}

/// Arrow-key selection backed by dialoguer.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Answers supplied up front, typically from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presets {
    pub database: Option<Database>,
    pub orm: Option<Orm>,
    pub linter: Option<Linter>,
    pub test_framework: Option<TestFramework>,
    pub docker: Option<bool>,
    /// Take the default for every axis without a preset instead of prompting
    pub use_defaults: bool,
}

/// Resolves one option axis from a preset, the default or the prompter.
pub fn ask_choice<T: Choice>(
    prompter: &dyn Prompter,
    preset: Option<T>,
    use_defaults: bool,
) -> Result<T> {
    if let Some(value) = preset {
        debug!("Using preset answer '{}' for: {}", value.label(), T::PROMPT);
        return Ok(value);
    }
    if use_defaults {
        return Ok(T::default());
    }

    let labels: Vec<&str> = T::ALL.iter().map(Choice::label).collect();
    let index = prompter.select(T::PROMPT, &labels, T::default_index())?;
    T::ALL
        .get(index)
        .copied()
        .ok_or_else(|| Error::PromptError(format!("selection {index} is out of range")))
}

/// Resolves the Yes/No docker question.
pub fn ask_docker(prompter: &dyn Prompter, preset: Option<bool>, use_defaults: bool) -> Result<bool> {
    if let Some(value) = preset {
        return Ok(value);
    }
    if use_defaults {
        return Ok(DOCKER_DEFAULT);
    }

    let default = if DOCKER_DEFAULT { 0 } else { 1 };
    match prompter.select(DOCKER_PROMPT, &YES_NO, default)? {
        0 => Ok(true),
        1 => Ok(false),
        index => Err(Error::PromptError(format!("selection {index} is out of range"))),
    }
}

/// Builds the project configuration, prompting for anything not preset.
///
/// The name is checked first so an invalid name never reaches the prompts.
///
/// # Errors
/// * `Error::InvalidName` if `name` is not identifier-like
/// * `Error::PromptError` if the terminal interaction fails
pub fn collect_config(
    name: &str,
    presets: &Presets,
    prompter: &dyn Prompter,
) -> Result<ProjectConfig> {
    validate_name(name)?;
    let defaults = presets.use_defaults;

    let database = ask_choice(prompter, presets.database, defaults)?;
    let orm = ask_choice(prompter, presets.orm, defaults)?;
    let linter = ask_choice(prompter, presets.linter, defaults)?;
    let test_framework = ask_choice(prompter, presets.test_framework, defaults)?;
    let docker = ask_docker(prompter, presets.docker, defaults)?;

    Ok(ProjectConfig { name: name.to_string(), database, orm, linter, test_framework, docker })
}
