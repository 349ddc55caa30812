//! Scenario document sources.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use super::error::LoadError;

// Generated by build.rs: `EMBEDDED_SCENARIOS: &[(&str, &str)]`, sorted by file name.
include!(concat!(env!("OUT_DIR"), "/embedded_scenarios.rs"));

/// One logical scenario file, possibly unreadable.
#[derive(Debug)]
pub struct Document {
    /// File name, used for ordering and in load diagnostics.
    pub name: String,
    pub contents: std::io::Result<Cow<'static, str>>,
}

impl Document {
    /// A document whose contents are already in memory.
    pub fn new(name: impl Into<String>, contents: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            contents: Ok(contents.into()),
        }
    }

    /// A document that exists but could not be read.
    pub fn unreadable(name: impl Into<String>, error: std::io::Error) -> Self {
        Self {
            name: name.into(),
            contents: Err(error),
        }
    }
}

/// The scenario documents compiled into the binary.
pub fn embedded_documents() -> Vec<Document> {
    EMBEDDED_SCENARIOS
        .iter()
        .map(|(name, contents)| Document::new(*name, *contents))
        .collect()
}

/// Collect every regular file in `dir` as a document.
///
/// Non-JSON files are filtered out later by the store, so they are returned
/// here as-is. Individual read failures become unreadable documents; only a
/// failure to list the directory itself is an error.
pub fn documents_from_dir(dir: &Path) -> Result<Vec<Document>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let document = match fs::read_to_string(&path) {
            Ok(contents) => Document::new(name, contents),
            Err(e) => Document::unreadable(name, e),
        };
        documents.push(document);
    }

    Ok(documents)
}
