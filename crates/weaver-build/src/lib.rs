//! Weaver build orchestration
//!
//! Turns a build command into compiler invocations:
//! - Command parsing and dispatch (library, examples, standalone files, demo)
//! - Argument lists for library, console and windowed executable targets
//! - Example discovery by file pattern
//! - Sequential subprocess execution with per-target failure isolation
//! - Artifact fingerprints

pub mod arguments;
pub mod build_spec;
pub mod discovery;
pub mod dispatcher;
pub mod error;
pub mod fingerprint;
pub mod paths;
pub mod report;
pub mod runner;
pub mod targets;

// Re-export main types
pub use arguments::{ArgumentBuilder, Invocation};
pub use build_spec::BuildSpec;
pub use discovery::{discover_examples, find_example};
pub use dispatcher::{Command, Dispatcher};
pub use error::{BuildError, BuildResult};
pub use fingerprint::{artifact_fingerprint, short_fingerprint};
pub use report::{BuildReport, BuildReporter, TargetOutcome};
pub use runner::{ProcessRunner, SystemRunner};
pub use targets::{BuildTarget, OutputKind, Resource};

// Re-export weaver-config types for convenience
pub use weaver_config::{Config, LayoutConfig};
