//! Compiler argument lists
//!
//! Every invocation shape has a fixed number of positional tokens. Absent
//! optional categories become empty tokens so that flag categories always sit
//! in the same position:
//!
//! target → output → doc/debug → no-logo → references → static links →
//! resources → extra flags
//!
//! A token is a group of whole process arguments. The group is space-joined
//! for display only; the compiler receives every argument intact, so paths
//! may contain spaces.

use crate::build_spec::BuildSpec;
use crate::error::BuildResult;
use crate::targets::OutputKind;
use std::fmt::Display;
use std::path::{Path, PathBuf};

pub const TARGET_FLAG: &str = "--target:";
pub const OUTPUT_FLAG: &str = "--out:";
pub const DOC_FLAG: &str = "--doc:";
pub const DEBUG_FLAG: &str = "--debug+";
pub const NO_LOGO_FLAG: &str = "--nologo";
pub const REFERENCE_FLAG: &str = "-r:";
pub const STATIC_LINK_FLAG: &str = "--staticlink:";
pub const RESOURCE_FLAG: &str = "--resource:";

/// Token count of a library invocation
pub const LIBRARY_TOKENS: usize = 7;
/// Token count of a console executable invocation
pub const CONSOLE_TOKENS: usize = 5;
/// Token count of a windowed executable invocation
pub const WINDOWED_TOKENS: usize = 9;

/// One compiler invocation, ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Compiler program
    pub program: String,
    /// Positional tokens, each holding zero or more whole arguments
    pub arguments: Vec<Vec<String>>,
    /// Artifact the compiler is asked to write
    pub output: PathBuf,
}

impl Invocation {
    /// Positional tokens: each group space-joined, absent groups empty
    pub fn tokens(&self) -> Vec<String> {
        self.arguments.iter().map(|group| group.join(" ")).collect()
    }

    /// The argument string: tokens joined by single spaces
    pub fn command_line(&self) -> String {
        self.tokens().join(" ")
    }

    /// Process arguments in token order
    pub fn argv(&self) -> Vec<String> {
        self.arguments.iter().flatten().cloned().collect()
    }
}

/// Builds invocations for one compiler
#[derive(Debug, Clone)]
pub struct ArgumentBuilder {
    program: String,
    executable_extension: String,
}

impl ArgumentBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            executable_extension: OutputKind::ConsoleExecutable.file_extension().to_string(),
        }
    }

    /// Extension used for console outputs that have no explicit path
    pub fn with_executable_extension(mut self, extension: impl Into<String>) -> Self {
        self.executable_extension = extension.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Validate `spec` and lay out its tokens
    pub fn build(&self, spec: &BuildSpec) -> BuildResult<Invocation> {
        spec.validate()?;
        let output = spec.resolved_output(&self.executable_extension)?;

        let arguments = match spec.kind {
            OutputKind::Library => library_tokens(spec, &output),
            OutputKind::ConsoleExecutable => console_tokens(spec, &output),
            OutputKind::WindowedExecutable => windowed_tokens(spec, &output),
        };

        Ok(Invocation {
            program: self.program.clone(),
            arguments,
            output,
        })
    }
}

fn library_tokens(spec: &BuildSpec, output: &Path) -> Vec<Vec<String>> {
    let doc = spec.doc.as_deref().unwrap_or(Path::new(""));
    vec![
        path_list(&spec.sources),
        vec![target_token(spec.kind)],
        vec![format!("{}{}", OUTPUT_FLAG, output.display())],
        vec![format!("{}{}", DOC_FLAG, doc.display())],
        debug_token(spec),
        vec![NO_LOGO_FLAG.to_string()],
        references_token(&spec.dependencies),
    ]
}

fn console_tokens(spec: &BuildSpec, output: &Path) -> Vec<Vec<String>> {
    vec![
        path_list(&spec.sources[..spec.sources.len().min(1)]),
        vec![target_token(spec.kind)],
        vec![format!("{}{}", OUTPUT_FLAG, output.display())],
        debug_token(spec),
        vec![NO_LOGO_FLAG.to_string()],
    ]
}

fn windowed_tokens(spec: &BuildSpec, output: &Path) -> Vec<Vec<String>> {
    vec![
        path_list(&spec.sources),
        vec![target_token(spec.kind)],
        vec![format!("{}{}", OUTPUT_FLAG, output.display())],
        debug_token(spec),
        vec![NO_LOGO_FLAG.to_string()],
        references_token(&spec.dependencies),
        flag_list(STATIC_LINK_FLAG, spec.static_links.as_deref()),
        flag_list(RESOURCE_FLAG, spec.resources.as_deref()),
        spec.extra_flags.clone().unwrap_or_default(),
    ]
}

fn target_token(kind: OutputKind) -> String {
    format!("{}{}", TARGET_FLAG, kind.target_name())
}

fn debug_token(spec: &BuildSpec) -> Vec<String> {
    if spec.debug_symbols {
        vec![DEBUG_FLAG.to_string()]
    } else {
        Vec::new()
    }
}

fn references_token(dependencies: &[PathBuf]) -> Vec<String> {
    let references: Vec<_> = dependencies.iter().map(|d| d.display()).collect();
    flag_list(REFERENCE_FLAG, Some(references.as_slice()))
}

fn path_list(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

/// `flag` prefixed to every item; empty when absent
fn flag_list<T: Display>(flag: &str, items: Option<&[T]>) -> Vec<String> {
    items
        .unwrap_or_default()
        .iter()
        .map(|item| format!("{}{}", flag, item))
        .collect()
}
