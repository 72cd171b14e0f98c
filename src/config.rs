use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::ledger::DEFAULT_LEDGER_FILE_NAME;

pub const CONFIG_FILE_NAME: &str = ".translocrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one subdirectory per locale.
    #[serde(default = "default_source_root", alias = "langPath")]
    pub source_root: String,
    /// Directory the JSON resources are written to.
    #[serde(default = "default_output_root")]
    pub output_root: String,
    /// Version ledger path. Defaults to `versions.json` inside `outputRoot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<String>,
    /// Whether to update the version ledger after exporting.
    #[serde(default = "default_versions")]
    pub versions: bool,
    /// Glob patterns, relative to each locale directory, of files to leave out.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Suppress empty `_zero`/`_one` keys produced by choice syntax.
    #[serde(default)]
    pub drop_empty_buckets: bool,
}

fn default_source_root() -> String {
    "./lang".to_string()
}

fn default_output_root() -> String {
    "./public/locales".to_string()
}

fn default_versions() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_root: default_output_root(),
            ledger_file: None,
            versions: default_versions(),
            ignores: Vec::new(),
            drop_empty_buckets: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        self.ignore_patterns().map(|_| ())
    }

    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }

    /// Ledger path as configured, or `<outputRoot>/versions.json`.
    pub fn ledger_file(&self) -> String {
        match &self.ledger_file {
            Some(path) => path.clone(),
            None => format!(
                "{}/{}",
                self.output_root.trim_end_matches('/'),
                DEFAULT_LEDGER_FILE_NAME
            ),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config are resolved against: the
    /// config file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}

/// Join a configured path onto `base_dir` unless it is already absolute.
pub fn resolve_path(base_dir: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        let rel = path.strip_prefix(".").unwrap_or(path);
        base_dir.join(rel)
    }
}
