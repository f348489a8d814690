/// Build orchestration error types
use std::path::PathBuf;
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildError>;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid command '{}': expected --lib, --example [--all | <name>], --all, --build <file> or --demo1", .tokens.join(" "))]
    InvalidCommand { tokens: Vec<String> },

    #[error("Compilation of '{target}' failed: compiler exited with code {exit_code} (output {output})")]
    CompilerFailed {
        target: String,
        output: PathBuf,
        exit_code: i32,
    },

    #[error("Failed to start compiler '{program}': {error}")]
    Spawn {
        program: String,
        error: std::io::Error,
    },

    #[error("Target not found: {target}")]
    TargetNotFound { target: String },

    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Invalid example pattern '{pattern}': {error}")]
    InvalidPattern {
        pattern: String,
        error: glob::PatternError,
    },

    #[error("Invalid build specification: {0}")]
    InvalidSpec(String),

    #[error("I/O error at {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
}

impl BuildError {
    /// Create an invalid command error
    pub fn invalid_command<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self::InvalidCommand {
            tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
        }
    }

    /// Create a compiler failure error
    pub fn compiler_failed(
        target: impl Into<String>,
        output: impl Into<PathBuf>,
        exit_code: i32,
    ) -> Self {
        Self::CompilerFailed {
            target: target.into(),
            output: output.into(),
            exit_code,
        }
    }

    /// Create a spawn error
    pub fn spawn(program: impl Into<String>, error: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            error,
        }
    }

    /// Create a target not found error
    pub fn target_not_found(target: impl Into<String>) -> Self {
        Self::TargetNotFound {
            target: target.into(),
        }
    }

    /// Create a source not found error
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, error: glob::PatternError) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            error,
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_command_message_lists_tokens() {
        let error = BuildError::invalid_command(&["--example", "a", "b"]);
        let message = error.to_string();
        assert!(message.starts_with("Invalid command '--example a b'"));
        assert!(message.contains("--demo1"));
    }

    #[test]
    fn test_compiler_failed_message() {
        let error = BuildError::compiler_failed("hello.fs", "build/hello.exe", 2);
        assert_eq!(
            error.to_string(),
            "Compilation of 'hello.fs' failed: compiler exited with code 2 (output build/hello.exe)"
        );
    }
}
