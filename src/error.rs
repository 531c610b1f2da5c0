//! Error handling for fastapi-init.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for scaffolding operations.
///
/// `InvalidName` and `TargetNotEmpty` are the two user-facing failures; both are
/// raised before anything is written. Every other variant is fatal and uncategorized.
#[derive(Error, Debug)]
pub enum Error {
    /// The project name is not an identifier-like token
    #[error("Invalid project name '{name}'. Use only letters, digits, hyphens, and underscores, and start with a letter.")]
    InvalidName { name: String },

    /// The target directory already has entries in it
    #[error("Target directory '{target_dir}' already exists and is not empty.")]
    TargetNotEmpty { target_dir: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by MiniJinja while rendering a template
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur while interacting with the terminal
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
