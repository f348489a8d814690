/// Build target types
use std::fmt;
use std::path::{Path, PathBuf};

/// Shape of a compiler output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Reusable library assembly
    Library,
    /// Console executable, single source, no references
    ConsoleExecutable,
    /// Windowed executable with references, static links and resources
    WindowedExecutable,
}

impl OutputKind {
    /// Value of the compiler's target-kind flag
    pub fn target_name(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::ConsoleExecutable => "exe",
            Self::WindowedExecutable => "winexe",
        }
    }

    /// Conventional file extension of the produced artifact
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Library => "dll",
            Self::ConsoleExecutable | Self::WindowedExecutable => "exe",
        }
    }

    /// Whether static links, resources and raw flags are serialized
    pub fn accepts_embedding(&self) -> bool {
        matches!(self, Self::WindowedExecutable)
    }

    /// Whether reference flags are serialized
    pub fn accepts_references(&self) -> bool {
        !matches!(self, Self::ConsoleExecutable)
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library => write!(f, "library"),
            Self::ConsoleExecutable => write!(f, "console executable"),
            Self::WindowedExecutable => write!(f, "windowed executable"),
        }
    }
}

/// Resource embedded into a windowed executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// File holding the resource
    pub source: PathBuf,
    /// Name the resource is looked up by at runtime
    pub logical_name: String,
}

impl Resource {
    pub fn new(source: impl Into<PathBuf>, logical_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            logical_name: logical_name.into(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.source.display(), self.logical_name)
    }
}

/// A named unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildTarget {
    /// The single library target
    Library { name: String },
    /// An example program, named by its source file name
    Example { name: String, path: PathBuf },
    /// A file passed on the command line
    Standalone { path: PathBuf },
}

impl BuildTarget {
    /// Create an example target from its source path
    pub fn example(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = crate::paths::base_name(&path).unwrap_or_else(|| path.display().to_string());
        Self::Example { name, path }
    }

    /// Display name of the target
    pub fn name(&self) -> String {
        match self {
            Self::Library { name } | Self::Example { name, .. } => name.clone(),
            Self::Standalone { path } => path.display().to_string(),
        }
    }

    /// Source file of single-file targets
    pub fn source(&self) -> Option<&Path> {
        match self {
            Self::Library { .. } => None,
            Self::Example { path, .. } | Self::Standalone { path } => Some(path),
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_kind_target_names() {
        assert_eq!(OutputKind::Library.target_name(), "library");
        assert_eq!(OutputKind::ConsoleExecutable.target_name(), "exe");
        assert_eq!(OutputKind::WindowedExecutable.target_name(), "winexe");
    }

    #[test]
    fn test_output_kind_extensions() {
        assert_eq!(OutputKind::Library.file_extension(), "dll");
        assert_eq!(OutputKind::ConsoleExecutable.file_extension(), "exe");
        assert_eq!(OutputKind::WindowedExecutable.file_extension(), "exe");
    }

    #[test]
    fn test_only_windowed_accepts_embedding() {
        assert!(!OutputKind::Library.accepts_embedding());
        assert!(!OutputKind::ConsoleExecutable.accepts_embedding());
        assert!(OutputKind::WindowedExecutable.accepts_embedding());
        assert!(!OutputKind::ConsoleExecutable.accepts_references());
    }

    #[test]
    fn test_resource_format() {
        let resource = Resource::new("res/app.ico", "app.ico");
        assert_eq!(resource.to_string(), "res/app.ico,app.ico");
    }

    #[test]
    fn test_example_name_is_file_name() {
        let target = BuildTarget::example("examples/hello.fs");
        assert_eq!(target.name(), "hello.fs");
        assert_eq!(target.source(), Some(Path::new("examples/hello.fs")));
    }

    #[test]
    fn test_target_display() {
        let library = BuildTarget::Library {
            name: "UiBinding".to_string(),
        };
        assert_eq!(library.to_string(), "UiBinding");
        assert!(library.source().is_none());

        let standalone = BuildTarget::Standalone {
            path: PathBuf::from("tools/foo.fs"),
        };
        assert_eq!(standalone.to_string(), "tools/foo.fs");
    }
}
