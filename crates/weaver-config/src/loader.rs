//! Configuration Loader
//!
//! Finds the project layout file and applies environment overrides.

use crate::layout::LayoutConfig;
use crate::{ConfigError, ConfigResult, LAYOUT_FILE_NAME};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader
///
/// Loads the layout with the following precedence:
/// 1. Built-in defaults - lowest priority
/// 2. Project layout (./weaver.toml) - overrides defaults
/// 3. Environment variables (WEAVER_*) - overrides the layout file
/// 4. CLI flags - highest priority (handled by caller)
#[derive(Debug, Default)]
pub struct ConfigLoader;

/// Loaded configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Effective layout
    pub layout: LayoutConfig,

    /// Directory relative paths are resolved against
    pub project_root: PathBuf,

    /// Layout file the configuration came from, if any
    pub layout_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find weaver.toml. When none exists the
    /// built-in defaults apply and the start directory becomes the project root.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        match find_layout_file(start_dir) {
            Some(layout_file) => self.load_from_file(&layout_file),
            None => {
                debug!(dir = %start_dir.display(), "no {} found, using defaults", LAYOUT_FILE_NAME);
                let layout = self.apply_env_overrides(LayoutConfig::default())?;
                Ok(Config {
                    layout,
                    project_root: start_dir.to_path_buf(),
                    layout_file: None,
                })
            }
        }
    }

    /// Load configuration from a specific layout file
    pub fn load_from_file(&self, layout_file: &Path) -> ConfigResult<Config> {
        debug!(file = %layout_file.display(), "loading layout");
        let layout = LayoutConfig::load_from_file(layout_file)?;
        let layout = self.apply_env_overrides(layout)?;

        let project_root = layout_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Config {
            layout,
            project_root,
            layout_file: Some(layout_file.to_path_buf()),
        })
    }

    /// Apply environment variable overrides to the layout
    ///
    /// Recognized variables: WEAVER_COMPILER, WEAVER_DEBUG, WEAVER_OUTPUT_DIR,
    /// WEAVER_REFERENCE_DIR, WEAVER_STRICT.
    fn apply_env_overrides(&self, mut layout: LayoutConfig) -> ConfigResult<LayoutConfig> {
        if let Ok(program) = env::var("WEAVER_COMPILER") {
            if program.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "WEAVER_COMPILER".to_string(),
                    reason: "compiler program cannot be empty".to_string(),
                });
            }
            layout.compiler.program = program;
        }

        if let Ok(debug) = env::var("WEAVER_DEBUG") {
            layout.compiler.debug = parse_flag(&debug);
        }

        if let Ok(dir) = env::var("WEAVER_OUTPUT_DIR") {
            layout.library.output_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = env::var("WEAVER_REFERENCE_DIR") {
            layout.references.dir = PathBuf::from(dir);
        }

        if let Ok(strict) = env::var("WEAVER_STRICT") {
            layout.behavior.strict = parse_flag(&strict);
        }

        Ok(layout)
    }
}

impl Config {
    /// Create a configuration rooted at the given directory
    pub fn new(layout: LayoutConfig, project_root: impl Into<PathBuf>) -> Self {
        Self {
            layout,
            project_root: project_root.into(),
            layout_file: None,
        }
    }

    /// Resolve a layout path against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Directory receiving built artifacts
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.layout.library.output_dir)
    }

    /// Directory scanned for examples
    pub fn examples_dir(&self) -> PathBuf {
        self.resolve(&self.layout.examples.dir)
    }

    /// Whether a layout file was found
    pub fn is_project(&self) -> bool {
        self.layout_file.is_some()
    }
}

/// Walk up from `start_dir` looking for the layout file
fn find_layout_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(LAYOUT_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
