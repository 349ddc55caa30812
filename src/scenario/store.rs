//! The loaded scenario corpus.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::error::{LoadError, ScenarioError};
use super::source::Document;
use super::Scenario;

/// Extension a document name must carry to be considered a scenario.
const SCENARIO_EXTENSION: &str = ".json";

/// Immutable, load-ordered set of scenarios.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so concurrent readers need no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioStore {
    scenarios: Vec<Scenario>,
}

/// Outcome of [`ScenarioStore::load`].
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub failures: Vec<LoadError>,
}

impl LoadReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Body of the list endpoint: every scenario plus its count.
#[derive(Debug, Serialize)]
pub struct ScenarioList<'a> {
    pub count: usize,
    pub scenarios: &'a [Scenario],
}

impl ScenarioStore {
    /// Create a store from already-parsed scenarios, kept in the given order.
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Parse documents into a store.
    ///
    /// Documents are ordered by name (byte-wise) so that 1-based indices are
    /// stable across runs. Names without a `.json` suffix are ignored. A
    /// document that cannot be read or parsed is skipped and reported; the
    /// rest of the corpus still loads.
    pub fn load(documents: impl IntoIterator<Item = Document>) -> (Self, LoadReport) {
        let mut documents: Vec<Document> = documents
            .into_iter()
            .filter(|doc| doc.name.ends_with(SCENARIO_EXTENSION))
            .collect();
        documents.sort_by(|a, b| a.name.cmp(&b.name));

        let mut scenarios = Vec::with_capacity(documents.len());
        let mut failures = Vec::new();

        for Document { name, contents } in documents {
            let contents = match contents {
                Ok(contents) => contents,
                Err(source) => {
                    failures.push(LoadError::Read { name, source });
                    continue;
                }
            };
            match serde_json::from_str::<Scenario>(&contents) {
                Ok(scenario) => scenarios.push(scenario),
                Err(source) => failures.push(LoadError::Parse { name, source }),
            }
        }

        if !failures.is_empty() {
            let errors = failures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(failed = failures.len(), %errors, "some scenarios failed to load");
        }
        info!(count = scenarios.len(), "scenarios loaded");

        let report = LoadReport {
            loaded: scenarios.len(),
            failures,
        };
        (Self { scenarios }, report)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// A scenario chosen uniformly at random.
    pub fn random(&self) -> Result<&Scenario, ScenarioError> {
        self.random_with(&mut rand::thread_rng())
    }

    /// Same as [`random`](Self::random) with a caller-supplied generator.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Scenario, ScenarioError> {
        self.scenarios.choose(rng).ok_or(ScenarioError::Empty)
    }

    /// Scenario at 1-based `index`, in load order.
    pub fn by_index(&self, index: i64) -> Result<&Scenario, ScenarioError> {
        let out_of_range = || ScenarioError::IndexOutOfRange {
            index,
            len: self.scenarios.len(),
        };
        let position = usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .ok_or_else(out_of_range)?;
        self.scenarios.get(position).ok_or_else(out_of_range)
    }

    /// Parse `raw` as a 1-based index and look it up.
    pub fn by_index_str(&self, raw: &str) -> Result<&Scenario, ScenarioError> {
        self.by_index(parse_index(raw)?)
    }

    pub fn list(&self) -> ScenarioList<'_> {
        ScenarioList {
            count: self.scenarios.len(),
            scenarios: &self.scenarios,
        }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}

/// Parse a scenario number from a path segment.
///
/// Accepts an optional sign and leading zeros; anything else, including
/// surrounding whitespace or a value that overflows `i64`, is invalid.
pub fn parse_index(raw: &str) -> Result<i64, ScenarioError> {
    raw.parse::<i64>().map_err(|_| ScenarioError::InvalidIndex {
        input: raw.to_string(),
    })
}
