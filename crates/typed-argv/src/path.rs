//! Working-directory-relative path resolution for path-hinted options.

use serde::Serialize;
use std::fmt;

/// A path resolved against the caller's working directory.
///
/// The segment list is kept instead of a pre-joined string so consumers can
/// re-join with a different separator. An absolute path starts with an empty
/// segment (the text before the leading separator).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPath {
    pub segments: Vec<String>,
    pub separator: char,
}

impl ResolvedPath {
    /// Resolve `raw` against `cwd`.
    ///
    /// `./x` and unqualified `x` append to the cwd segments; each leading
    /// `../` pops one trailing cwd segment before the remainder is appended.
    pub fn resolve(raw: &str, cwd: &str) -> Self {
        let separator = detect_separator(cwd);
        let mut segments: Vec<String> = cwd.split(separator).map(str::to_string).collect();

        let mut rest = raw;
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else {
            while let Some(stripped) = rest.strip_prefix("../") {
                segments.pop();
                rest = stripped;
            }
        }
        if !rest.is_empty() {
            segments.extend(rest.split(separator).map(str::to_string));
        }

        Self {
            segments,
            separator,
        }
    }

    /// Join the segments back into a single path string.
    pub fn join(&self) -> String {
        self.segments.join(&self.separator.to_string())
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

// `\` wins only for cwd strings that contain no `/` at all, so mixed-style
// Windows paths still split on `/`.
fn detect_separator(cwd: &str) -> char {
    if cwd.contains('\\') && !cwd.contains('/') {
        '\\'
    } else {
        '/'
    }
}
