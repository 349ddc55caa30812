//! Scenario lookup and load errors.

use std::path::PathBuf;

/// Errors from looking up a scenario in a loaded store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("no scenarios available")]
    Empty,

    #[error("invalid scenario number: {input:?}")]
    InvalidIndex { input: String },

    #[error("scenario number {index} is out of range (1..={len})")]
    IndexOutOfRange { index: i64, len: usize },
}

/// A document that could not be turned into a scenario.
///
/// Load errors never abort startup; the offending document is skipped.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read scenario directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
