//! Source Quality Metrics Library
//!
//! This library computes static source-code quality metrics over a directory
//! tree: total lines, comment lines, an approximate cyclomatic-complexity
//! score, maximum brace-nesting depth, and duplicate-line count. All analysis
//! is line-oriented and heuristic; no syntax tree is built.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{ErrorItem, FileMetrics, MetricTotals};
pub use services::classify::Level;

use std::path::Path;
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options for scanning a directory tree
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extensions treated as source files (matched case-insensitively).
    pub extensions: Vec<String>,
    /// Control-flow keywords counted by the complexity scanner.
    pub keywords: Vec<String>,
    pub max_depth: Option<u16>,
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: services::walk::default_extensions(),
            keywords: services::metrics::complexity::default_keywords(),
            max_depth: None,
            follow_symlinks: false,
        }
    }
}

/// Summary result from a scan operation
#[derive(Debug)]
pub struct Summary {
    pub root: String,
    pub totals: MetricTotals,
    pub files: Vec<FileMetrics>,
    pub errors: Vec<ErrorItem>,
    pub started_at: std::time::SystemTime,
    pub finished_at: std::time::SystemTime,
}

/// Scan a directory tree and return per-file metrics plus tree totals
///
/// # Arguments
/// * `root` - The root directory to scan
/// * `opts` - Scan options
///
/// # Returns
/// A Summary containing per-file metrics, folded totals, and any errors
/// encountered. Per-entry failures never abort the scan; each one is
/// recorded and the affected entry contributes zero to every metric.
pub fn scan_summary<P: AsRef<Path>>(root: P, opts: &ScanOptions) -> Result<Summary> {
    let root_path = root.as_ref().to_string_lossy().to_string();

    if !root.as_ref().exists() {
        return Err(Error::InvalidInput(format!(
            "Path does not exist: {root_path}"
        )));
    }

    if !root.as_ref().is_dir() {
        return Err(Error::InvalidInput(format!(
            "Path is not a directory: {root_path}"
        )));
    }

    let started_at = std::time::SystemTime::now();

    // Walk the tree collecting eligible source files
    let mut context = services::walk::WalkContext::new(opts.clone());
    services::walk::collect_source_files(&root, &mut context);

    let mut errors = context.errors;

    // Scan collected files; each scanner makes its own pass over the lines
    let (files, scan_errors) = services::metrics::scan_all(context.files, opts);
    errors.extend(scan_errors);

    let totals = services::aggregate::fold_totals(&files);

    let finished_at = std::time::SystemTime::now();

    Ok(Summary {
        root: root_path,
        totals,
        files,
        errors,
        started_at,
        finished_at,
    })
}
