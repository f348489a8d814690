//! Console reporter - colored build status lines

use colored::*;
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;
use weaver_build::{short_fingerprint, BuildError, BuildReport, BuildReporter, BuildTarget};

/// Forces colors off for its lifetime when requested.
///
/// Dropping the guard clears the override, handing color detection back to
/// the environment (`NO_COLOR`, `CLICOLOR`, terminal checks).
pub struct ColorGuard {
    overridden: bool,
}

impl ColorGuard {
    pub fn acquire(no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self {
            overridden: no_color,
        }
    }
}

impl Drop for ColorGuard {
    fn drop(&mut self) {
        if self.overridden {
            colored::control::unset_override();
        }
    }
}

/// Writes progress to stdout and failures to stderr.
///
/// Write errors are ignored: a closed pipe must not change build outcomes.
pub struct ConsoleReporter<W: Write, E: Write> {
    out: W,
    err: E,
    /// Show artifact fingerprints
    verbose: bool,
}

impl ConsoleReporter<Stdout, Stderr> {
    /// Reporter on the process's standard streams
    pub fn stdio(verbose: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), verbose)
    }
}

impl<W: Write, E: Write> ConsoleReporter<W, E> {
    pub fn new(out: W, err: E, verbose: bool) -> Self {
        Self { out, err, verbose }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> BuildReporter for ConsoleReporter<W, E> {
    fn started(&mut self, target: &BuildTarget, output: &Path) {
        let _ = writeln!(
            self.out,
            "{} {} -> {}",
            "Building".cyan().bold(),
            target,
            output.display()
        );
    }

    fn succeeded(&mut self, target: &BuildTarget, output: &Path, fingerprint: Option<&str>) {
        let mut line = format!("{} {} -> {}", "Finished".green().bold(), target, output.display());
        if self.verbose {
            if let Some(hash) = fingerprint {
                line.push_str(&format!(" [sha256 {}]", short_fingerprint(hash)));
            }
        }
        let _ = writeln!(self.out, "{}", line);
    }

    fn failed(&mut self, target: &BuildTarget, error: &BuildError) {
        let _ = writeln!(self.err, "{} {}: {}", "Failed".red().bold(), target, error);
    }

    fn listed(&mut self, name: &str) {
        let _ = writeln!(self.out, "{}", name);
    }

    fn invalid(&mut self, error: &BuildError) {
        let _ = writeln!(self.err, "{} {}", "error:".red().bold(), error);
    }

    fn summary(&mut self, report: &BuildReport) {
        let line = format!("{} built, {} failed", report.built(), report.failed());
        let _ = writeln!(self.out, "{}", line.cyan());
    }
}
