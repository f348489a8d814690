//! Shared test doubles for dispatcher tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use weaver_build::{
    BuildError, BuildReport, BuildReporter, BuildResult, BuildTarget, Invocation, ProcessRunner,
};
use weaver_config::{Config, LayoutConfig};

/// Records invocations instead of spawning the compiler
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub invocations: Vec<Invocation>,
    /// Exit codes keyed by output file name; everything else exits 0
    pub exit_codes: HashMap<String, i32>,
    /// Write the output file on success, the way a real compiler would
    pub write_outputs: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writing_outputs() -> Self {
        Self {
            write_outputs: true,
            ..Self::default()
        }
    }

    pub fn failing(mut self, output_name: &str, code: i32) -> Self {
        self.exit_codes.insert(output_name.to_string(), code);
        self
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> BuildResult<i32> {
        self.invocations.push(invocation.clone());

        let name = invocation
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let code = self.exit_codes.get(&name).copied().unwrap_or(0);

        if code == 0 && self.write_outputs {
            fs::write(&invocation.output, format!("artifact {}", name))
                .map_err(|e| BuildError::io(&invocation.output, e))?;
        }
        Ok(code)
    }
}

/// One reporter callback
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Started(String),
    Succeeded(String, Option<String>),
    Failed(String),
    Listed(String),
    Invalid,
    Summary { built: usize, failed: usize },
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl BuildReporter for RecordingReporter {
    fn started(&mut self, target: &BuildTarget, _output: &Path) {
        self.events.push(Event::Started(target.name()));
    }

    fn succeeded(&mut self, target: &BuildTarget, _output: &Path, fingerprint: Option<&str>) {
        self.events.push(Event::Succeeded(
            target.name(),
            fingerprint.map(str::to_string),
        ));
    }

    fn failed(&mut self, target: &BuildTarget, _error: &BuildError) {
        self.events.push(Event::Failed(target.name()));
    }

    fn listed(&mut self, name: &str) {
        self.events.push(Event::Listed(name.to_string()));
    }

    fn invalid(&mut self, _error: &BuildError) {
        self.events.push(Event::Invalid);
    }

    fn summary(&mut self, report: &BuildReport) {
        self.events.push(Event::Summary {
            built: report.built(),
            failed: report.failed(),
        });
    }
}

/// A project directory with library sources, the demo and the given examples
pub fn create_project(examples: &[&str]) -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let config = create_project_in(temp_dir.path(), examples);
    (temp_dir, config)
}

/// Same layout as `create_project`, rooted at `root`
pub fn create_project_in(root: &Path, examples: &[&str]) -> Config {
    fs::create_dir_all(root.join("src")).unwrap();
    for source in ["Native.fs", "Controls.fs", "Application.fs"] {
        fs::write(root.join("src").join(source), "module M\n").unwrap();
    }

    fs::create_dir_all(root.join("examples")).unwrap();
    for example in examples {
        fs::write(root.join("examples").join(example), "open UiBinding\n").unwrap();
    }

    fs::create_dir_all(root.join("resources")).unwrap();
    fs::write(root.join("resources").join("demo1.ico"), [0u8; 4]).unwrap();

    Config::new(LayoutConfig::default(), root)
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn output_names(invocations: &[Invocation]) -> Vec<String> {
    invocations.iter().map(|i| file_name(&i.output)).collect()
}

pub fn path_str(path: PathBuf) -> String {
    path.display().to_string()
}
