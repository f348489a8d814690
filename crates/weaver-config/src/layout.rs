//! Project Layout (weaver.toml)
//!
//! Every section and key is optional. Missing keys fall back to the defaults
//! documented on each section.

use crate::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Project layout from weaver.toml
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields, default)]
pub struct LayoutConfig {
    /// External compiler settings
    pub compiler: CompilerConfig,

    /// The single library target
    pub library: LibraryConfig,

    /// Third-party reference libraries
    pub references: ReferencesConfig,

    /// Example program discovery
    pub examples: ExamplesConfig,

    /// The hardcoded demo example
    pub demo: DemoConfig,

    /// Process-level behavior
    pub behavior: BehaviorConfig,
}

/// External compiler settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct CompilerConfig {
    /// Compiler program name or path (default: "fsc")
    pub program: String,

    /// Extension given to executables when no output path is supplied (default: "exe")
    pub executable_extension: String,

    /// Emit debug symbols (default: true)
    pub debug: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "fsc".to_string(),
            executable_extension: "exe".to_string(),
            debug: true,
        }
    }
}

/// The library target
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct LibraryConfig {
    /// Library name, used for the output and documentation file names
    pub name: String,

    /// Library sources in compilation order
    pub sources: Vec<PathBuf>,

    /// Directory receiving every built artifact
    pub output_dir: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: "UiBinding".to_string(),
            sources: vec![
                PathBuf::from("src/Native.fs"),
                PathBuf::from("src/Controls.fs"),
                PathBuf::from("src/Application.fs"),
            ],
            output_dir: PathBuf::from("build"),
        }
    }
}

impl LibraryConfig {
    /// File name of the library artifact
    pub fn output_file_name(&self) -> String {
        format!("{}.dll", self.name)
    }

    /// File name of the generated XML documentation
    pub fn doc_file_name(&self) -> String {
        format!("{}.xml", self.name)
    }
}

/// Third-party reference libraries
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ReferencesConfig {
    /// Installation directory holding the reference libraries
    pub dir: PathBuf,

    /// Library file names inside `dir`, in reference order
    pub libraries: Vec<String>,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("/usr/lib/mono/4.5"),
            libraries: vec![
                "System.Drawing.dll".to_string(),
                "System.Windows.Forms.dll".to_string(),
            ],
        }
    }
}

impl ReferencesConfig {
    /// Full paths of every reference library
    pub fn paths(&self) -> Vec<PathBuf> {
        self.libraries.iter().map(|lib| self.dir.join(lib)).collect()
    }
}

/// Example program discovery
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ExamplesConfig {
    /// Directory scanned for example sources
    pub dir: PathBuf,

    /// Glob matched against file names (`*`, `?` and `[...]` classes)
    pub pattern: String,

    /// Libraries statically linked into every example
    pub static_links: Vec<String>,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("examples"),
            pattern: "*.fs".to_string(),
            static_links: Vec::new(),
        }
    }
}

/// The demo example built by `--demo1`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct DemoConfig {
    /// Demo source file
    pub source: PathBuf,

    /// Icon embedded as a resource
    pub icon: PathBuf,

    /// Logical resource name of the icon
    pub logical_name: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("examples/demo1.fs"),
            icon: PathBuf::from("resources/demo1.ico"),
            logical_name: "demo1.ico".to_string(),
        }
    }
}

/// Process-level behavior
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields, default)]
pub struct BehaviorConfig {
    /// Exit non-zero when any target fails
    pub strict: bool,
}

impl LayoutConfig {
    /// Load a layout from a weaver.toml file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::TomlParseError { error, .. } => ConfigError::TomlParseError {
                file: path.to_path_buf(),
                error,
            },
            other => other,
        })?;

        Ok(config)
    }

    /// Parse and validate layout content
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            file: PathBuf::from(crate::LAYOUT_FILE_NAME),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the layout
    pub fn validate(&self) -> ConfigResult<()> {
        if self.compiler.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "compiler.program".to_string(),
                reason: "compiler program cannot be empty".to_string(),
            });
        }

        if self.library.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "library.name".to_string(),
                reason: "library name cannot be empty".to_string(),
            });
        }

        if self.library.sources.is_empty() {
            return Err(ConfigError::ValidationError(
                "library.sources must list at least one source file".to_string(),
            ));
        }

        if self.examples.pattern.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "examples.pattern".to_string(),
                reason: "pattern cannot be empty".to_string(),
            });
        }

        if let Err(e) = glob::Pattern::new(&self.examples.pattern) {
            return Err(ConfigError::InvalidValue {
                field: "examples.pattern".to_string(),
                reason: format!("'{}' is not a valid glob: {}", self.examples.pattern, e),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layout_uses_defaults() {
        let config = LayoutConfig::parse("").unwrap();
        assert_eq!(config, LayoutConfig::default());
        assert_eq!(config.compiler.program, "fsc");
        assert!(config.compiler.debug);
        assert_eq!(config.examples.pattern, "*.fs");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = LayoutConfig::parse(
            r#"
[compiler]
program = "fsharpc"
"#,
        )
        .unwrap();
        assert_eq!(config.compiler.program, "fsharpc");
        assert_eq!(config.compiler.executable_extension, "exe");
        assert!(config.compiler.debug);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = LayoutConfig::parse(
            r#"
[compiler]
optimize = true
"#,
        );
        assert!(matches!(result, Err(ConfigError::TomlParseError { .. })));
    }

    #[test]
    fn test_empty_program_rejected() {
        let result = LayoutConfig::parse(
            r#"
[compiler]
program = "  "
"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_pattern_rejected() {
        let result = LayoutConfig::parse(
            r#"
[examples]
pattern = "[ab.fs"
"#,
        );
        match result {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "examples.pattern"),
            other => panic!("expected an invalid pattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_character_class_pattern_accepted() {
        let config = LayoutConfig::parse(
            r#"
[examples]
pattern = "[ab]*.fs"
"#,
        )
        .unwrap();
        assert_eq!(config.examples.pattern, "[ab]*.fs");
    }

    #[test]
    fn test_empty_library_sources_rejected() {
        let result = LayoutConfig::parse(
            r#"
[library]
sources = []
"#,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_library_file_names() {
        let library = LibraryConfig {
            name: "Gtk".to_string(),
            ..Default::default()
        };
        assert_eq!(library.output_file_name(), "Gtk.dll");
        assert_eq!(library.doc_file_name(), "Gtk.xml");
    }

    #[test]
    fn test_reference_paths_keep_order() {
        let references = ReferencesConfig {
            dir: PathBuf::from("/opt/refs"),
            libraries: vec!["b.dll".to_string(), "a.dll".to_string()],
        };
        assert_eq!(
            references.paths(),
            vec![PathBuf::from("/opt/refs/b.dll"), PathBuf::from("/opt/refs/a.dll")]
        );
    }
}
