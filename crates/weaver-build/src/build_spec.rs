//! Configuration of a single compiler invocation

use crate::error::{BuildError, BuildResult};
use crate::paths;
use crate::targets::{OutputKind, Resource};
use std::path::PathBuf;

/// Everything the argument builder needs for one invocation.
///
/// Optional fields distinguish "absent" from "empty"; the argument builder
/// serializes both as an empty positional token for windowed executables and
/// ignores them entirely for the other kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSpec {
    /// Source files in compilation order
    pub sources: Vec<PathBuf>,
    /// Reference libraries in resolution order
    pub dependencies: Vec<PathBuf>,
    /// Output shape
    pub kind: OutputKind,
    /// Destination file
    pub output: Option<PathBuf>,
    /// Documentation file (libraries only)
    pub doc: Option<PathBuf>,
    /// Libraries embedded into the output
    pub static_links: Option<Vec<String>>,
    /// Embedded resources
    pub resources: Option<Vec<Resource>>,
    /// Raw flags passed verbatim
    pub extra_flags: Option<Vec<String>>,
    /// Emit debug symbols
    pub debug_symbols: bool,
}

impl BuildSpec {
    fn new(kind: OutputKind, sources: Vec<PathBuf>) -> Self {
        Self {
            sources,
            dependencies: Vec::new(),
            kind,
            output: None,
            doc: None,
            static_links: None,
            resources: None,
            extra_flags: None,
            debug_symbols: true,
        }
    }

    /// Library invocation; output and documentation paths are mandatory
    pub fn library(
        sources: Vec<PathBuf>,
        output: impl Into<PathBuf>,
        doc: impl Into<PathBuf>,
    ) -> Self {
        let mut spec = Self::new(OutputKind::Library, sources);
        spec.output = Some(output.into());
        spec.doc = Some(doc.into());
        spec
    }

    /// Console executable from a single source
    pub fn console(source: impl Into<PathBuf>) -> Self {
        Self::new(OutputKind::ConsoleExecutable, vec![source.into()])
    }

    /// Windowed executable; output path is mandatory
    pub fn windowed(sources: Vec<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let mut spec = Self::new(OutputKind::WindowedExecutable, sources);
        spec.output = Some(output.into());
        spec
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<PathBuf>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_static_links(mut self, static_links: Vec<String>) -> Self {
        self.static_links = Some(static_links);
        self
    }

    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_extra_flags(mut self, extra_flags: Vec<String>) -> Self {
        self.extra_flags = Some(extra_flags);
        self
    }

    pub fn with_debug_symbols(mut self, debug_symbols: bool) -> Self {
        self.debug_symbols = debug_symbols;
        self
    }

    /// Destination of the artifact.
    ///
    /// Only console executables have a default: the source path with its
    /// extension replaced by `executable_extension`.
    pub fn resolved_output(&self, executable_extension: &str) -> BuildResult<PathBuf> {
        match (&self.output, self.kind) {
            (Some(output), _) => Ok(output.clone()),
            (None, OutputKind::ConsoleExecutable) => self
                .sources
                .first()
                .map(|source| paths::replace_extension(source, executable_extension))
                .ok_or_else(|| BuildError::InvalidSpec("no source files".to_string())),
            (None, kind) => Err(BuildError::InvalidSpec(format!(
                "{} targets require an output path",
                kind
            ))),
        }
    }

    /// Check the invariants of the configuration
    pub fn validate(&self) -> BuildResult<()> {
        if self.sources.is_empty() {
            return Err(BuildError::InvalidSpec("no source files".to_string()));
        }

        if self.sources.iter().any(|s| s.as_os_str().is_empty()) {
            return Err(BuildError::InvalidSpec("empty source path".to_string()));
        }

        if self.kind == OutputKind::ConsoleExecutable && self.sources.len() != 1 {
            return Err(BuildError::InvalidSpec(format!(
                "console executables take exactly one source file, got {}",
                self.sources.len()
            )));
        }

        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(BuildError::InvalidSpec("empty output path".to_string()));
            }
        }

        match (self.kind, &self.doc) {
            (OutputKind::Library, None) => Err(BuildError::InvalidSpec(
                "library targets require a documentation path".to_string(),
            )),
            (OutputKind::Library, Some(doc)) if doc.as_os_str().is_empty() => Err(
                BuildError::InvalidSpec("empty documentation path".to_string()),
            ),
            (kind, Some(_)) if kind != OutputKind::Library => Err(BuildError::InvalidSpec(
                format!("documentation output is only valid for libraries, not {}", kind),
            )),
            _ => Ok(()),
        }
    }
}
