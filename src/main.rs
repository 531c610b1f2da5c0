//! fastapi-init's main application entry point.
//! Handles command-line argument parsing, the selection prompts and the
//! generation flow.

use fastapi_init::{
    cli::{get_args, Args},
    config::validate_name,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{ensure_output_dir, generate, scaffold},
    prompt::{collect_config, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the project name and the target directory
/// 2. Prompts for every option not given on the command line
/// 3. Generates the file set and writes it (or lists it for `--dry-run`)
/// 4. Prints the next steps
fn run(args: Args) -> Result<()> {
    println!("FastAPI Initializer");
    validate_name(&args.name)?;
    println!("Creating project: {}", args.name);

    let target_dir = args.target_dir();
    ensure_output_dir(&target_dir)?;

    let prompt = DialoguerPrompter::new();
    let engine = MiniJinjaRenderer::new();
    let config = collect_config(&args.name, &args.presets(), &prompt)?;
    log::debug!("Resolved configuration: {config}");

    if args.dry_run {
        println!("Options: {config}");
        let files = generate(&config, &engine)?;
        for path in files.paths() {
            println!("{}", target_dir.join(path).display());
        }
        println!("Dry run: {} files would be generated.", files.len());
        return Ok(());
    }

    let files = scaffold(&config, &target_dir, &engine)?;
    log::info!("Wrote {} files to {}", files.len(), target_dir.display());

    println!();
    println!("✔ FastAPI project '{}' created successfully!", config.name);
    println!();
    println!("Next steps:");
    println!("  1. cd {}", target_dir.display());
    println!("  2. uv sync");
    println!("  3. uv run uvicorn app.main:app --reload");
    println!("  4. Open http://127.0.0.1:8000 in your browser");
    Ok(())
}
