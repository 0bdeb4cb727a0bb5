// src/config.rs
use crate::core::fixer::{DEFAULT_HTML_EXTENSION, FixOptions};
use crate::models::Policy;
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "unhash.toml";

/// Settings read from `unhash.toml`.
///
/// ```toml
/// directory = "dist"
/// policy = "best-effort"
/// dry_run = false
/// html_extensions = ["html", "htm"]
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Build directory; relative paths are resolved against the config file
    pub directory: Option<PathBuf>,
    pub policy: Policy,
    pub dry_run: bool,
    pub html_extensions: Vec<String>,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            directory: None,
            policy: Policy::default(),
            dry_run: false,
            html_extensions: vec![DEFAULT_HTML_EXTENSION.to_owned()],
        }
    }
}

impl Config {
    /// Reads and validates a config file.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The TOML is malformed or contains unknown keys
    /// * `html_extensions` is empty or contains an empty entry
    #[inline]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(directory) = config.directory.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.directory = Some(if directory.is_absolute() {
                directory
            } else {
                base.join(directory)
            });
        }

        config.html_extensions = config
            .html_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_owned())
            .collect();
        if config.html_extensions.is_empty() || config.html_extensions.iter().any(String::is_empty) {
            bail!(
                "{}: html_extensions must list at least one non-empty extension",
                path.display()
            );
        }

        Ok(config)
    }

    /// Loads `explicit` when given, otherwise `unhash.toml` from the current
    /// directory when there is one, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Fails when the chosen file cannot be loaded; an explicit path that does
    /// not exist is an error too.
    #[inline]
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(config = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = env::current_dir()?.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(config = %candidate.display(), "loading config");
            return Self::load(&candidate);
        }

        tracing::debug!("no config file, using defaults");
        Ok(Self::default())
    }

    #[inline]
    #[must_use]
    pub fn fix_options(&self) -> FixOptions {
        FixOptions {
            policy: self.policy,
            dry_run: self.dry_run,
            html_extensions: self.html_extensions.clone(),
        }
    }
}

/// `data` next to the directory holding the executable, i.e. `<exe dir>/../data`.
///
/// # Errors
///
/// Fails when the location of the running executable is unknown.
#[inline]
pub fn default_build_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let exe_dir = exe
        .parent()
        .with_context(|| format!("Executable has no parent directory: {}", exe.display()))?;
    Ok(exe_dir.parent().unwrap_or(exe_dir).join("data"))
}
