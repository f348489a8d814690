//! Example discovery - find example programs by file pattern

use crate::error::BuildResult;
use crate::paths;
use crate::targets::BuildTarget;
use std::path::Path;
use tracing::debug;

/// Every file in `dir` matching `pattern`, as example targets.
///
/// Targets come back in directory listing order, which differs between
/// platforms. An empty or missing directory yields no targets; a malformed
/// pattern is an error.
pub fn discover_examples(dir: &Path, pattern: &str) -> BuildResult<Vec<BuildTarget>> {
    let targets: Vec<_> = paths::list_matching(dir, pattern)?
        .into_iter()
        .map(BuildTarget::example)
        .collect();

    debug!(
        dir = %dir.display(),
        pattern,
        count = targets.len(),
        "discovered examples"
    );
    Ok(targets)
}

/// The example whose source file is named `name`
pub fn find_example(dir: &Path, name: &str) -> Option<BuildTarget> {
    let path = dir.join(name);
    // Names with directory parts would escape the examples directory
    if paths::base_name(&path).as_deref() != Some(name) || !paths::is_file(&path) {
        return None;
    }
    Some(BuildTarget::example(path))
}
