//! Project scaffolding for `trellis new`.
//!
//! Writes a minimal application tree:
//!
//! ```text
//! <path>/
//!   Cargo.toml
//!   config/app.toml
//!   public/.gitkeep
//!   src/main.rs
//!   src/routes.rs
//! ```
//!
//! Templates live in `templates/` and are rendered with minijinja. An
//! existing target is never overwritten.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use minijinja::{context, Environment, UndefinedBehavior};
use thiserror::Error;

use crate::config::loader::CONFIG_FILE_NAME;
use crate::config::AppConfig;

/// Project files rendered from templates: (name, output path, source).
const TEMPLATES: &[(&str, &str, &str)] = &[
    (
        "Cargo.toml",
        "Cargo.toml",
        include_str!("templates/Cargo.toml.j2"),
    ),
    ("main.rs", "src/main.rs", include_str!("templates/main.rs.j2")),
    (
        "routes.rs",
        "src/routes.rs",
        include_str!("templates/routes.rs.j2"),
    ),
];

/// Error type for project scaffolding.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Target already exists: {0}")]
    Exists(PathBuf),

    #[error("Invalid project name: {0:?}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Create a new project at `path`.
///
/// The package name defaults to the last path component. Returns the
/// created root directory.
pub fn new_project(path: &Path, name: Option<&str>) -> Result<PathBuf, ScaffoldError> {
    if path.exists() {
        return Err(ScaffoldError::Exists(path.to_path_buf()));
    }

    let raw_name = match name {
        Some(name) => name.to_string(),
        None => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    let name = package_name(&raw_name).ok_or(ScaffoldError::InvalidName(raw_name))?;

    let config = AppConfig {
        env: "local".to_string(),
        ..AppConfig::default()
    };

    // Render everything before touching the filesystem.
    let templates = template_env()?;
    let ctx = context! {
        name => name.as_str(),
        trellis_version => env!("CARGO_PKG_VERSION"),
    };
    let mut rendered = Vec::with_capacity(TEMPLATES.len());
    for (template, output, _) in TEMPLATES {
        rendered.push((*output, templates.get_template(template)?.render(&ctx)?));
    }
    let app_config = toml::to_string_pretty(&config)?;

    for (output, contents) in &rendered {
        write_file(&path.join(output), contents)?;
    }
    write_file(&path.join("config").join(CONFIG_FILE_NAME), &app_config)?;
    write_file(&path.join("public/.gitkeep"), "")?;

    tracing::info!(path = %path.display(), name = %name, "Project created");
    Ok(path.to_path_buf())
}

fn template_env() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    for (name, _, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    tracing::debug!(path = %path.display(), "Writing file");
    fs::write(path, contents)
}

/// Cargo-compatible package name: lower-case, `-` for anything that is
/// not alphanumeric or `_`, must start with a letter.
fn package_name(raw: &str) -> Option<String> {
    let name: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let name = name.trim_matches('-').to_string();

    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => Some(name),
        _ => None,
    }
}
