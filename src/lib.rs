//! fastapi-init is a project scaffolding tool for FastAPI services.
//! It turns a handful of selected options into a ready-to-run directory tree
//! of application, configuration, container and documentation files.

/// Command-line interface module for the fastapi-init application
pub mod cli;

/// Project options and the immutable project configuration
pub mod config;

/// Error types and handling for the fastapi-init application
pub mod error;

/// Logger initialisation
pub mod logger;

/// Core generation: resolves the file set and writes it to disk
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Embedded template sources and per-variant lookups
pub mod templates;
