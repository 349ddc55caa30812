//! Scenario corpus: the scripted terminal sessions the page plays back.
//!
//! A scenario document is a JSON array of `{"type": ..., "text": ...}` records.
//! Documents are collected from a [`Document`] source (the set embedded at
//! build time, or a directory on disk), parsed once at startup into an
//! immutable [`ScenarioStore`], and shared read-only with every request.
//!
//! # Module Structure
//!
//! - [`error`] - Lookup and load errors
//! - [`source`] - Where scenario documents come from
//! - [`store`] - The loaded corpus and its access operations

mod error;
mod source;
mod store;

use serde::{Deserialize, Serialize};

pub use error::{LoadError, ScenarioError};
pub use source::{documents_from_dir, embedded_documents, Document};
pub use store::{parse_index, LoadReport, ScenarioList, ScenarioStore};

/// A single line of a scenario.
///
/// `kind` is serialized as `type` and is never interpreted by the server;
/// the page decides how to render each tag (command, output, prompt, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScenarioLine {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

impl ScenarioLine {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

/// An ordered script of lines, in playback order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scenario(Vec<ScenarioLine>);

impl Scenario {
    pub fn new(lines: Vec<ScenarioLine>) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> &[ScenarioLine] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ScenarioLine>> for Scenario {
    fn from(lines: Vec<ScenarioLine>) -> Self {
        Self(lines)
    }
}
