//! Filesystem walk producing the set of eligible source files
//!
//! The walker only enumerates; reading and scanning file contents happens in
//! a separate phase. Every per-entry failure is recorded and skipped, never
//! fatal, so a partially readable tree still yields a report.

use crate::ScanOptions;
use crate::models::ErrorItem;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions recognized as source files by default. All of these share the
/// `//` and `/* */` comment syntax and brace-delimited blocks the scanners
/// assume.
const DEFAULT_EXTENSIONS: &[&str] = &[
    "kt", "java", "rs", "go", "c", "h", "cpp", "hpp", "js", "ts",
];

/// Default eligible-extension set as owned strings for `ScanOptions`.
#[must_use]
pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

/// Walk state: collected files, recovered errors, and the active options
pub struct WalkContext {
    pub files: Vec<PathBuf>,
    pub errors: Vec<ErrorItem>,
    pub options: ScanOptions,
}

impl WalkContext {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self {
            files: Vec::new(),
            errors: Vec::new(),
            options,
        }
    }

    /// Check whether this path carries one of the configured source suffixes
    fn is_eligible(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.options
            .extensions
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }

    /// Record an error encountered during the walk
    fn record_error(&mut self, path: &Path, error: &std::io::Error) {
        log::warn!("Skipping {}: {error}", path.display());
        self.errors.push(ErrorItem::from_io(path, error));
    }
}

/// Collect all eligible source files under `root` into the context.
///
/// Visitation order is unspecified; all metric combinations are commutative
/// so order never affects totals.
pub fn collect_source_files<P: AsRef<Path>>(root: P, context: &mut WalkContext) {
    walk_recursive(root.as_ref(), 0, context);
}

fn walk_recursive(current: &Path, depth: u16, context: &mut WalkContext) {
    if let Some(max_depth) = context.options.max_depth
        && depth > max_depth
    {
        return;
    }

    // Metadata without following symlinks
    let mut metadata = match fs::symlink_metadata(current) {
        Ok(m) => m,
        Err(e) => {
            context.record_error(current, &e);
            return;
        }
    };

    if metadata.is_symlink() {
        if !context.options.follow_symlinks {
            return;
        }
        // Resolve through the link when following is enabled
        metadata = match fs::metadata(current) {
            Ok(m) => m,
            Err(e) => {
                context.record_error(current, &e);
                return;
            }
        };
    }

    if metadata.is_file() {
        if context.is_eligible(current) {
            log::debug!("Eligible source file: {}", current.display());
            context.files.push(current.to_path_buf());
        }
        return;
    }

    if !metadata.is_dir() {
        // Other file types (devices, sockets, etc.)
        return;
    }

    let entries = match fs::read_dir(current) {
        Ok(e) => e,
        Err(e) => {
            context.record_error(current, &e);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                context.record_error(current, &e);
                continue;
            }
        };
        walk_recursive(&entry.path(), depth + 1, context);
    }
}
