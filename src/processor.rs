//! Core project generation.
//! Resolves a [`ProjectConfig`] into an ordered set of files, then writes them
//! under the target directory.

use indexmap::IndexMap;
use log::{debug, trace};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{validate_name, Choice, ProjectConfig};
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::templates;

/// A generated file: path relative to the project root and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub content: String,
}

/// Generated files keyed by relative path, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    entries: IndexMap<PathBuf, String>,
}

impl FileSet {
    fn insert<P: Into<PathBuf>>(&mut self, path: P, content: String) {
        self.entries.insert(path.into(), content);
    }

    /// Content of the file at `path`, if it was generated.
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Option<&str> {
        self.entries.get(path.as_ref()).map(String::as_str)
    }

    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        self.entries.contains_key(path.as_ref())
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries.iter().map(|(path, content)| (path.as_path(), content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for FileSet {
    type Item = FileEntry;
    type IntoIter = std::vec::IntoIter<FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_iter()
            .map(|(path, content)| FileEntry { path, content })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Builds the rendering context shared by every template.
///
/// Only values derived from `config` and fixed constants go in here, which keeps
/// generation a pure function of the configuration.
pub fn template_context(config: &ProjectConfig) -> serde_json::Value {
    serde_json::json!({
        "name": config.name,
        "database": config.database,
        "orm": config.orm,
        "linter": config.linter,
        "test_framework": config.test_framework,
        "docker": config.docker,
        "has_database": config.has_database(),
        "has_orm": config.has_orm(),
        "has_db_layer": config.has_db_layer(),
        "has_tests": config.has_tests(),
        "database_url": config.database.url(),
        "database_label": config.database.label(),
        "orm_label": config.orm.label(),
        "dependencies": config.dependencies(),
    })
}

struct Emitter<'a> {
    renderer: &'a dyn TemplateRenderer,
    context: serde_json::Value,
    files: FileSet,
}

impl Emitter<'_> {
    fn render(&mut self, path: &str, template: &str) -> Result<()> {
        let content = self.renderer.render(template, &self.context)?;
        debug!("Resolved file: {path}");
        self.files.insert(path, content);
        Ok(())
    }

    fn package(&mut self, dir: &str) {
        let path = format!("{dir}/__init__.py");
        debug!("Resolved file: {path}");
        self.files.insert(path, templates::PACKAGE_MARKER.to_string());
    }
}

/// Resolves the complete file set for `config` without touching the filesystem.
///
/// # Errors
/// * `Error::InvalidName` if the project name is not identifier-like
/// * `Error::MinijinjaError` if a template fails to render
pub fn generate(config: &ProjectConfig, renderer: &dyn TemplateRenderer) -> Result<FileSet> {
    validate_name(&config.name)?;

    let mut out =
        Emitter { renderer, context: template_context(config), files: FileSet::default() };

    out.package("app");
    out.render("app/main.py", templates::APP_MAIN)?;
    out.render("app/README.md", templates::APP_README)?;

    out.render("app/api/__init__.py", templates::API_INIT)?;
    out.render("app/api/deps.py", templates::API_DEPS)?;
    out.render("app/api/README.md", templates::API_README)?;
    out.package("app/api/v1");
    out.render("app/api/v1/users.py", templates::API_V1_USERS)?;
    out.render("app/api/v1/README.md", templates::API_V1_README)?;

    out.package("app/core");
    out.render("app/core/config.py", templates::CORE_CONFIG)?;
    out.render("app/core/security.py", templates::CORE_SECURITY)?;
    out.render("app/core/README.md", templates::CORE_README)?;

    if let Some(model) = templates::model_template(config.orm) {
        out.package("app/models");
        out.render("app/models/user.py", model)?;
        out.render("app/models/README.md", templates::MODELS_README)?;
    } else {
        trace!("No ORM selected, skipping app/models");
    }

    out.package("app/schemas");
    out.render("app/schemas/user.py", templates::SCHEMAS_USER)?;
    out.render("app/schemas/README.md", templates::SCHEMAS_README)?;
    out.package("app/services");
    out.render("app/services/user_service.py", templates::SERVICES_USER_SERVICE)?;
    out.render("app/services/README.md", templates::SERVICES_README)?;

    if config.has_db_layer() {
        out.package("app/db");
        out.render("app/db/base.py", templates::base_template(config.orm))?;
        out.render("app/db/README.md", templates::DB_README)?;
    } else {
        trace!("No database or ORM selected, skipping app/db");
    }
    if config.has_database() {
        out.render("app/db/session.py", templates::session_template(config.orm))?;
    }

    if config.has_tests() {
        out.package("tests");
        out.render("tests/test_users.py", templates::TESTS_USERS)?;
        out.render("tests/README.md", templates::TESTS_README)?;
    } else {
        trace!("No test framework selected, skipping tests");
    }

    out.render(".env", templates::ENV)?;
    out.render(".gitignore", templates::GITIGNORE)?;
    if config.docker {
        out.render(".dockerignore", templates::DOCKERIGNORE)?;
        out.render("Dockerfile", templates::DOCKERFILE)?;
        out.render("docker-compose.yml", templates::DOCKER_COMPOSE)?;
    } else {
        trace!("Docker disabled, skipping container files");
    }
    out.render("pyproject.toml", templates::PYPROJECT)?;
    out.render("README.md", templates::README)?;

    Ok(out.files)
}

/// Ensures the target directory is absent or empty.
///
/// # Errors
/// * `Error::TargetNotEmpty` if the directory exists and has any entry
/// * `Error::IoError` if the path exists but cannot be listed
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let output_dir = output_dir.as_ref();
    if !output_dir.exists() {
        debug!("Target directory {} does not exist yet", output_dir.display());
        return Ok(());
    }
    if fs::read_dir(output_dir)?.next().is_some() {
        return Err(Error::TargetNotEmpty { target_dir: output_dir.display().to_string() });
    }
    debug!("Target directory {} exists and is empty", output_dir.display());
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

/// Writes every file of `files` below `output_dir`, in order.
///
/// Nothing is rolled back if a write fails half way through.
pub fn write_files<P: AsRef<Path>>(files: &FileSet, output_dir: P) -> Result<()> {
    let output_dir = output_dir.as_ref();
    for (path, content) in files.iter() {
        let target = output_dir.join(path);
        debug!("Writing file: {}", target.display());
        write_file(&target, content)?;
    }
    Ok(())
}

/// Validates, generates and writes a project into `output_dir`.
///
/// All content is rendered before the first write, so a rejected name, a
/// non-empty target or a template failure leaves the filesystem untouched.
///
/// # Returns
/// * `Result<FileSet>` - The files that were written
pub fn scaffold<P: AsRef<Path>>(
    config: &ProjectConfig,
    output_dir: P,
    renderer: &dyn TemplateRenderer,
) -> Result<FileSet> {
    let output_dir = output_dir.as_ref();
    validate_name(&config.name)?;
    ensure_output_dir(output_dir)?;

    let files = generate(config, renderer)?;
    write_files(&files, output_dir)?;

    Ok(files)
}
