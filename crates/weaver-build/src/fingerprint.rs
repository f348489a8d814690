//! Artifact fingerprints

use crate::paths;
use std::path::Path;
use tracing::debug;

/// Number of hex digits shown in console output
const SHORT_LEN: usize = 12;

/// SHA-256 of a freshly built artifact.
///
/// `None` when the compiler exited successfully without writing the file.
pub fn artifact_fingerprint(output: &Path) -> Option<String> {
    if !paths::is_file(output) {
        debug!(output = %output.display(), "no artifact to fingerprint");
        return None;
    }

    match paths::content_hash(output) {
        Ok(hash) => Some(hash),
        Err(e) => {
            debug!(error = %e, "fingerprint unavailable");
            None
        }
    }
}

/// Leading digits of a fingerprint for display
pub fn short_fingerprint(fingerprint: &str) -> &str {
    let len = fingerprint.len().min(SHORT_LEN);
    &fingerprint[..len]
}
