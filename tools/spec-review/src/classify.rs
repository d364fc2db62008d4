//! Partition of a PR's changed files into spec artifacts, generated apidocs
//! and everything else.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Path fragment that marks generated API documentation.
pub const APIDOCS_MARKER: &str = "apidocs";

/// Display value for a spec name or version that could not be derived.
pub const UNKNOWN: &str = "unknown";

// `{spec}/{version}/{file}` where the version segment is numeric, e.g. `10` or `1.0`.
static VERSIONED_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*/[0-9]+(\.[0-9]+)*/.*$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Javadoc,
    Spec,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileClassification {
    pub spec_files: Vec<String>,
    pub javadoc_files: Vec<String>,
    pub other_files: Vec<String>,
    /// First path segment of the first spec file.
    pub spec_name: Option<String>,
    /// Second path segment of the first spec file.
    pub spec_version: Option<String>,
    pub spec_pdf: Option<String>,
    pub spec_html: Option<String>,
}

impl FileClassification {
    pub fn spec_name(&self) -> &str {
        self.spec_name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn spec_version(&self) -> &str {
        self.spec_version.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn total(&self) -> usize {
        self.spec_files.len() + self.javadoc_files.len() + self.other_files.len()
    }
}

pub fn kind_of(path: &str) -> FileKind {
    if path.find(APIDOCS_MARKER).is_some_and(|idx| idx > 0) {
        FileKind::Javadoc
    } else if VERSIONED_PATH.is_match(path) {
        FileKind::Spec
    } else {
        FileKind::Other
    }
}

/// Classify changed-file paths in order. The first spec file decides the
/// spec name and version; the last `.pdf`/`.html` spec file wins.
pub fn classify<I, S>(paths: I) -> FileClassification
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut classification = FileClassification::default();

    for path in paths {
        let path = path.into();
        match kind_of(&path) {
            FileKind::Javadoc => classification.javadoc_files.push(path),
            FileKind::Spec => {
                if classification.spec_files.is_empty() {
                    let mut segments = path.split('/').filter(|s| !s.is_empty());
                    classification.spec_name = segments.next().map(str::to_string);
                    classification.spec_version = segments.next().map(str::to_string);
                }
                let file_name = path.rsplit('/').next().unwrap_or(&path);
                if file_name.ends_with(".pdf") {
                    classification.spec_pdf = Some(file_name.to_string());
                } else if file_name.ends_with(".html") {
                    classification.spec_html = Some(file_name.to_string());
                }
                classification.spec_files.push(path);
            }
            FileKind::Other => classification.other_files.push(path),
        }
    }

    if classification.spec_files.is_empty() {
        warn!("no spec changes found, spec name and version are unknown");
    }
    debug!(
        spec = classification.spec_name(),
        version = classification.spec_version(),
        spec_files = ?classification.spec_files,
        javadoc_files = ?classification.javadoc_files,
        other_files = ?classification.other_files,
        "classified changed files"
    );

    classification
}
