//! Integration tests for scenario loading

use hackterm::scenario::{documents_from_dir, LoadError, ScenarioError};
use hackterm::{Config, ScenarioStore};
use tempfile::TempDir;

use crate::helpers::{fixture_scenarios_dir, one_line};

#[test]
fn fixture_dir_loads_valid_documents_in_name_order() {
    let documents = documents_from_dir(&fixture_scenarios_dir()).unwrap();
    let (store, report) = ScenarioStore::load(documents);

    assert_eq!(store.len(), 3);
    assert_eq!(report.loaded, 3);
    assert_eq!(report.failures.len(), 2);

    assert_eq!(store.by_index(1).unwrap(), &one_line("cmd", "ls"));
    assert_eq!(store.by_index(2).unwrap().len(), 2);
    assert_eq!(store.by_index(3).unwrap(), &one_line("prompt", "$ "));
}

#[test]
fn fixture_failures_name_the_broken_documents() {
    let documents = documents_from_dir(&fixture_scenarios_dir()).unwrap();
    let (_store, report) = ScenarioStore::load(documents);

    let names: Vec<String> = report
        .failures
        .iter()
        .map(|failure| match failure {
            LoadError::Parse { name, .. } | LoadError::Read { name, .. } => name.clone(),
            LoadError::Directory { path, .. } => path.display().to_string(),
        })
        .collect();
    assert_eq!(names, vec!["c_broken.json", "d_object.json"]);
}

#[test]
fn loading_twice_gives_the_same_order() {
    let (first, _) = ScenarioStore::load(documents_from_dir(&fixture_scenarios_dir()).unwrap());
    let (second, _) = ScenarioStore::load(documents_from_dir(&fixture_scenarios_dir()).unwrap());
    assert_eq!(first, second);
}

#[test]
fn directory_of_only_broken_documents_is_an_empty_corpus() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("one.json"), "{").unwrap();
    std::fs::write(dir.path().join("two.json"), "42").unwrap();

    let (store, report) = ScenarioStore::load(documents_from_dir(dir.path()).unwrap());
    assert!(store.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert_eq!(store.random(), Err(ScenarioError::Empty));
    assert_eq!(store.list().count, 0);
}

#[test]
fn config_scenarios_dir_is_honoured() {
    let config = Config {
        scenarios_dir: Some(fixture_scenarios_dir()),
        ..Config::headless()
    };
    let store = hackterm::lifecycle::load_store(&config);
    assert_eq!(store.len(), 3);
}

#[test]
fn embedded_corpus_is_not_empty() {
    let store = hackterm::lifecycle::load_store(&Config::headless());
    assert!(!store.is_empty());
    assert!(store.scenarios().iter().all(|s| !s.is_empty()));
}
