//! Build outcomes and the reporting seam

use crate::error::BuildError;
use crate::targets::BuildTarget;
use std::path::{Path, PathBuf};

/// Receives progress from the dispatcher.
///
/// Reporting is a side effect only: implementations never influence which
/// targets are built or how their outcome is recorded.
pub trait BuildReporter {
    /// A compiler invocation is about to start
    fn started(&mut self, target: &BuildTarget, output: &Path);

    /// The compiler exited with code 0
    fn succeeded(&mut self, target: &BuildTarget, output: &Path, fingerprint: Option<&str>);

    /// The target could not be built
    fn failed(&mut self, target: &BuildTarget, error: &BuildError);

    /// One discovered example name
    fn listed(&mut self, name: &str);

    /// The command matched no action
    fn invalid(&mut self, error: &BuildError);

    /// A batch action finished
    fn summary(&mut self, _report: &BuildReport) {}
}

/// Result of one build attempt
#[derive(Debug)]
pub enum TargetOutcome {
    Built {
        target: BuildTarget,
        output: PathBuf,
        fingerprint: Option<String>,
    },
    Failed {
        target: BuildTarget,
        error: BuildError,
    },
}

impl TargetOutcome {
    pub fn target(&self) -> &BuildTarget {
        match self {
            Self::Built { target, .. } | Self::Failed { target, .. } => target,
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self, Self::Built { .. })
    }
}

/// Everything one dispatch did
#[derive(Debug, Default)]
pub struct BuildReport {
    /// One entry per attempted target, in build order
    pub outcomes: Vec<TargetOutcome>,
    /// Names printed by the listing action
    pub listed: Vec<String>,
    /// The command was not recognized
    pub invalid: bool,
}

impl BuildReport {
    pub fn built(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_built()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.built()
    }

    /// Any failed target or an invalid command
    pub fn has_failures(&self) -> bool {
        self.invalid || self.failed() > 0
    }
}
