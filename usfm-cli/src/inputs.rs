//! Input handling: expand path patterns, read each file, extract and merge verses.
//!
//! A file that cannot be read is reported and skipped; the remaining files are still
//! processed. Merging follows file order, so the last file wins when two files contain the
//! same verse.

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use usfm_parser::{UsfmParser, VerseMap};

/// One input file and its contents
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub source: String,
}

/// Expand glob patterns. A pattern that matches nothing, or is not a valid pattern, is kept
/// as a literal path.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matched: Vec<PathBuf> = match glob::glob(pattern) {
            Ok(entries) => entries
                .filter_map(|entry| match entry {
                    Ok(path) => Some(path),
                    Err(e) => {
                        log::warn!("skipping unreadable match for '{}': {}", pattern, e);
                        None
                    }
                })
                .collect(),
            Err(e) => {
                log::debug!("'{}' is not a glob pattern ({}), using it as a path", pattern, e);
                Vec::new()
            }
        };

        if matched.is_empty() {
            paths.push(PathBuf::from(pattern));
        } else {
            paths.extend(matched);
        }
    }

    paths
}

pub fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read every regular file in `paths`, logging and skipping the ones that fail.
pub fn load_sources(paths: &[PathBuf]) -> Vec<SourceFile> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_file() {
            log::warn!("skipping {}: not a file", path.display());
            continue;
        }

        match read_source(path) {
            Ok(source) => files.push(SourceFile {
                path: path.clone(),
                source,
            }),
            Err(e) => log::error!("{}", e),
        }
    }

    files
}

/// Parse each file and merge the verse maps in order
pub fn extract_verses(parser: &UsfmParser, files: &[SourceFile]) -> VerseMap {
    let mut all_verses = VerseMap::new();

    for file in files {
        let verses = parser.parse(&file.source);
        log::info!("{}: {} verses", file.path.display(), verses.len());
        all_verses.extend(verses);
    }

    all_verses
}
