//! Compiler subprocess execution

use crate::arguments::Invocation;
use crate::error::{BuildError, BuildResult};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Runs one invocation to completion and returns its exit code
pub trait ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> BuildResult<i32>;
}

/// Runs the compiler as a child process with inherited stdio.
///
/// Blocks until the child exits; there is no timeout.
#[derive(Debug, Default)]
pub struct SystemRunner {
    working_dir: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the compiler from `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> BuildResult<i32> {
        let argv = invocation.argv();
        debug!(program = %invocation.program, args = ?argv, "spawning compiler");

        let mut command = Command::new(&invocation.program);
        command.args(&argv);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let status = command
            .status()
            .map_err(|e| BuildError::spawn(&invocation.program, e))?;

        // Killed by a signal: no exit code, count it as a failure
        let code = status.code().unwrap_or(1);
        debug!(program = %invocation.program, code, "compiler exited");
        Ok(code)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn invocation(program: &str) -> Invocation {
        Invocation {
            program: program.to_string(),
            arguments: vec![
                vec!["a.fs".to_string()],
                Vec::new(),
                vec!["--nologo".to_string()],
            ],
            output: PathBuf::from("a.exe"),
        }
    }

    #[test]
    fn test_successful_process_exit_code() {
        let mut runner = SystemRunner::new();
        assert_eq!(runner.run(&invocation("true")).unwrap(), 0);
    }

    #[test]
    fn test_failing_process_exit_code() {
        let mut runner = SystemRunner::new();
        assert_ne!(runner.run(&invocation("false")).unwrap(), 0);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let mut runner = SystemRunner::new().with_working_dir(std::env::temp_dir());
        let result = runner.run(&invocation("weaver-no-such-compiler"));
        assert!(matches!(result, Err(BuildError::Spawn { .. })));
    }
}
