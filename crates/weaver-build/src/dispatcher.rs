//! Command dispatch - map command tokens to compiler invocations

use crate::arguments::ArgumentBuilder;
use crate::build_spec::BuildSpec;
use crate::discovery;
use crate::error::{BuildError, BuildResult};
use crate::fingerprint;
use crate::paths;
use crate::report::{BuildReport, BuildReporter, TargetOutcome};
use crate::runner::ProcessRunner;
use crate::targets::{BuildTarget, Resource};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use weaver_config::Config;

/// A recognized build command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `--lib`
    Library,
    /// `--example`
    ListExamples,
    /// `--example --all`
    AllExamples,
    /// `--all`
    Everything,
    /// `--example <name>`
    Example(String),
    /// `--build <file>`
    Standalone(PathBuf),
    /// `--demo1`
    Demo,
    /// Anything else
    Invalid(Vec<String>),
}

impl Command {
    /// Classify a token sequence; every sequence maps to exactly one command
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        match tokens.as_slice() {
            ["--lib"] => Self::Library,
            ["--example"] => Self::ListExamples,
            ["--example", "--all"] => Self::AllExamples,
            ["--all"] => Self::Everything,
            ["--example", name] if *name != "--all" => Self::Example(name.to_string()),
            ["--build", file] => Self::Standalone(PathBuf::from(file)),
            ["--demo1"] => Self::Demo,
            _ => Self::Invalid(tokens.iter().map(|t| t.to_string()).collect()),
        }
    }

    /// Commands that expand to several independent builds
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::AllExamples | Self::Everything)
    }
}

/// Executes commands against one project layout.
///
/// Stateless between dispatches: every call discovers its targets afresh and
/// builds them one at a time.
pub struct Dispatcher<R, P> {
    config: Config,
    arguments: ArgumentBuilder,
    runner: R,
    reporter: P,
}

impl<R: ProcessRunner, P: BuildReporter> Dispatcher<R, P> {
    pub fn new(config: Config, runner: R, reporter: P) -> Self {
        let arguments = ArgumentBuilder::new(config.layout.compiler.program.clone())
            .with_executable_extension(config.layout.compiler.executable_extension.clone());
        Self {
            config,
            arguments,
            runner,
            reporter,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn reporter(&self) -> &P {
        &self.reporter
    }

    pub fn into_parts(self) -> (R, P) {
        (self.runner, self.reporter)
    }

    /// Parse `tokens` and execute the resulting command
    pub fn dispatch<S: AsRef<str>>(&mut self, tokens: &[S]) -> BuildReport {
        let command = Command::parse(tokens);
        debug!(?command, "dispatching");
        self.execute(&command)
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: &Command) -> BuildReport {
        let mut report = BuildReport::default();

        match command {
            Command::Library => {
                let outcome = self.build_library();
                report.outcomes.push(outcome);
            }
            Command::ListExamples => {
                for target in self.discover_examples(&mut report) {
                    let name = target.name();
                    self.reporter.listed(&name);
                    report.listed.push(name);
                }
            }
            Command::AllExamples => {
                self.build_examples(&mut report);
            }
            Command::Everything => {
                let outcome = self.build_library();
                report.outcomes.push(outcome);
                self.build_examples(&mut report);
            }
            Command::Example(name) => {
                let outcome = self.build_named_example(name);
                report.outcomes.push(outcome);
            }
            Command::Standalone(file) => {
                let outcome = self.build_standalone(file);
                report.outcomes.push(outcome);
            }
            Command::Demo => {
                let outcome = self.build_demo();
                report.outcomes.push(outcome);
            }
            Command::Invalid(tokens) => {
                let error = BuildError::invalid_command(tokens);
                warn!(%error, "no build action matched");
                self.reporter.invalid(&error);
                report.invalid = true;
            }
        }

        if command.is_batch() {
            info!(built = report.built(), failed = report.failed(), "batch finished");
            self.reporter.summary(&report);
        }

        report
    }

    fn build_library(&mut self) -> TargetOutcome {
        let target = BuildTarget::Library {
            name: self.config.layout.library.name.clone(),
        };
        let spec = self.library_spec();
        self.build(target, spec)
    }

    fn build_examples(&mut self, report: &mut BuildReport) {
        for target in self.discover_examples(report) {
            let spec = self.example_spec(target.source().unwrap_or(Path::new("")));
            let outcome = self.build(target, spec);
            report.outcomes.push(outcome);
        }
    }

    fn build_named_example(&mut self, name: &str) -> TargetOutcome {
        let dir = self.config.examples_dir();
        match discovery::find_example(&dir, name) {
            Some(target) => {
                let spec = self.example_spec(target.source().unwrap_or(Path::new("")));
                self.build(target, spec)
            }
            None => {
                let target = BuildTarget::Example {
                    name: name.to_string(),
                    path: dir.join(name),
                };
                self.fail(target, BuildError::target_not_found(name))
            }
        }
    }

    fn build_standalone(&mut self, file: &Path) -> TargetOutcome {
        let target = BuildTarget::Standalone {
            path: file.to_path_buf(),
        };
        if !paths::is_file(file) {
            return self.fail(target, BuildError::source_not_found(file));
        }

        let spec =
            BuildSpec::console(file).with_debug_symbols(self.config.layout.compiler.debug);
        self.build(target, spec)
    }

    fn build_demo(&mut self) -> TargetOutcome {
        let demo = &self.config.layout.demo;
        let source = self.config.resolve(&demo.source);
        let resource = Resource::new(self.config.resolve(&demo.icon), demo.logical_name.clone());

        let target = BuildTarget::example(&source);
        if !paths::is_file(&source) {
            return self.fail(target, BuildError::source_not_found(source));
        }

        let spec = self.example_spec(&source).with_resources(vec![resource]);
        self.build(target, spec)
    }

    /// Discovered examples; an unusable pattern is recorded as one failed target
    fn discover_examples(&mut self, report: &mut BuildReport) -> Vec<BuildTarget> {
        let dir = self.config.examples_dir();
        let pattern = self.config.layout.examples.pattern.clone();
        match discovery::discover_examples(&dir, &pattern) {
            Ok(targets) => targets,
            Err(error) => {
                let target = BuildTarget::Example {
                    name: pattern,
                    path: dir,
                };
                let outcome = self.fail(target, error);
                report.outcomes.push(outcome);
                Vec::new()
            }
        }
    }

    fn library_output(&self) -> PathBuf {
        self.config
            .output_dir()
            .join(self.config.layout.library.output_file_name())
    }

    fn reference_paths(&self) -> Vec<PathBuf> {
        self.config
            .layout
            .references
            .paths()
            .iter()
            .map(|path| self.config.resolve(path))
            .collect()
    }

    fn library_spec(&self) -> BuildSpec {
        let layout = &self.config.layout;
        let sources = layout
            .library
            .sources
            .iter()
            .map(|source| self.config.resolve(source))
            .collect();
        let doc = self.config.output_dir().join(layout.library.doc_file_name());

        BuildSpec::library(sources, self.library_output(), doc)
            .with_dependencies(self.reference_paths())
            .with_debug_symbols(layout.compiler.debug)
    }

    /// Windowed executable referencing the library and the third-party libraries
    fn example_spec(&self, source: &Path) -> BuildSpec {
        let layout = &self.config.layout;
        let file_name = source.file_name().unwrap_or(source.as_os_str());
        let output = paths::replace_extension(
            &self.config.output_dir().join(file_name),
            &layout.compiler.executable_extension,
        );

        let mut dependencies = vec![self.library_output()];
        dependencies.extend(self.reference_paths());

        let spec = BuildSpec::windowed(vec![source.to_path_buf()], output)
            .with_dependencies(dependencies)
            .with_debug_symbols(layout.compiler.debug);

        if layout.examples.static_links.is_empty() {
            spec
        } else {
            spec.with_static_links(layout.examples.static_links.clone())
        }
    }

    fn build(&mut self, target: BuildTarget, spec: BuildSpec) -> TargetOutcome {
        match self.compile(&target, &spec) {
            Ok((output, fingerprint)) => {
                info!(name = %target, output = %output.display(), "built");
                self.reporter
                    .succeeded(&target, &output, fingerprint.as_deref());
                TargetOutcome::Built {
                    target,
                    output,
                    fingerprint,
                }
            }
            Err(error) => self.fail(target, error),
        }
    }

    fn compile(
        &mut self,
        target: &BuildTarget,
        spec: &BuildSpec,
    ) -> BuildResult<(PathBuf, Option<String>)> {
        let invocation = self.arguments.build(spec)?;
        self.reporter.started(target, &invocation.output);

        paths::ensure_parent_dir(&invocation.output)?;

        debug!(
            program = %invocation.program,
            args = %invocation.command_line(),
            "invoking compiler"
        );
        let exit_code = self.runner.run(&invocation)?;
        if exit_code != 0 {
            return Err(BuildError::compiler_failed(
                target.name(),
                invocation.output,
                exit_code,
            ));
        }

        let fingerprint = fingerprint::artifact_fingerprint(&invocation.output);
        if let Some(hash) = &fingerprint {
            debug!(name = %target, sha256 = %hash, "artifact fingerprint");
        }
        Ok((invocation.output, fingerprint))
    }

    fn fail(&mut self, target: BuildTarget, error: BuildError) -> TargetOutcome {
        warn!(name = %target, %error, "build failed");
        self.reporter.failed(&target, &error);
        TargetOutcome::Failed { target, error }
    }
}
