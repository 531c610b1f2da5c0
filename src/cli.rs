//! Command-line interface implementation for fastapi-init.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::{Database, Linter, Orm, TestFramework};
use crate::prompt::Presets;

/// Command-line arguments structure for fastapi-init.
#[derive(Parser, Debug)]
#[command(author, version, about = "fastapi-init: scaffold a FastAPI project skeleton", long_about = None)]
pub struct Args {
    /// Project name, also used as the folder name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory in which the project folder is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Database engine, skips the database prompt
    #[arg(long, value_enum)]
    pub database: Option<Database>,

    /// ORM, skips the ORM prompt
    #[arg(long, value_enum)]
    pub orm: Option<Orm>,

    /// Linter, skips the linter prompt
    #[arg(long, value_enum)]
    pub linter: Option<Linter>,

    /// Test framework, skips the test framework prompt
    #[arg(long, value_enum)]
    pub test_framework: Option<TestFramework>,

    /// Whether to generate Docker files, skips the Docker prompt
    #[arg(long, value_name = "BOOL")]
    pub docker: Option<bool>,

    /// Accept the default answer for every question not given as a flag
    #[arg(short = 'y', long)]
    pub defaults: bool,

    /// Print the files that would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Answers given on the command line.
    pub fn presets(&self) -> Presets {
        Presets {
            database: self.database,
            orm: self.orm,
            linter: self.linter,
            test_framework: self.test_framework,
            docker: self.docker,
            use_defaults: self.defaults,
        }
    }

    /// Folder the project is generated into.
    pub fn target_dir(&self) -> PathBuf {
        self.output_dir.join(&self.name)
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if the project name is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
