//! Weaver Configuration System
//!
//! Describes where the build orchestrator finds its inputs and puts its outputs:
//! - Compiler program and executable extension
//! - Library sources, output directory and documentation file
//! - Third-party reference libraries
//! - Example discovery directory and file pattern
//! - The demo example and its icon resource
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project layout file (./weaver.toml, found by walking up from the start directory)
//! 3. Environment variables (WEAVER_*)
//! 4. CLI flags (handled by the caller)
//!
//! # Example
//!
//! ```no_run
//! use weaver_config::ConfigLoader;
//! use std::path::Path;
//!
//! let loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("compiler: {}", config.layout.compiler.program);
//! ```

pub mod layout;
pub mod loader;

use std::path::PathBuf;
use thiserror::Error;

/// Name of the project layout file
pub const LAYOUT_FILE_NAME: &str = "weaver.toml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use layout::{
    BehaviorConfig, CompilerConfig, DemoConfig, ExamplesConfig, LayoutConfig, LibraryConfig,
    ReferencesConfig,
};
pub use loader::{Config, ConfigLoader};
