//! Build script for hackterm - embeds the scenario corpus and build info
//!
//! Always:
//! - Generates `$OUT_DIR/embedded_scenarios.rs` listing every `scenarios/*.json`
//!   file, sorted by file name, as `(name, include_str!(path))` pairs
//! - Emits `HACKTERM_BUILD_DATE` with the build date
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` with the commit hash

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Directory (relative to the manifest) holding the scenario documents.
const SCENARIO_DIR: &str = "scenarios";

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    // Use the date command for cross-platform compatibility
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    // Fallback for systems where date command differs
    "unknown".to_string()
}

/// List `*.json` files in the scenario directory, sorted by file name.
fn scenario_files(dir: &Path) -> Vec<(String, PathBuf)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            println!("cargo:warning=Failed to read {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            Some((name, path))
        })
        .collect();

    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

/// Write the generated module that embeds every scenario document.
fn generate_embedded_scenarios(manifest_dir: &Path, out_dir: &Path) {
    let dir = manifest_dir.join(SCENARIO_DIR);
    println!("cargo:rerun-if-changed={}", dir.display());

    let mut generated = String::from("pub(crate) static EMBEDDED_SCENARIOS: &[(&str, &str)] = &[\n");
    for (name, path) in scenario_files(&dir) {
        println!("cargo:rerun-if-changed={}", path.display());
        generated.push_str(&format!(
            "    ({:?}, include_str!({:?})),\n",
            name,
            path.display().to_string()
        ));
    }
    generated.push_str("];\n");

    let target = out_dir.join("embedded_scenarios.rs");
    if let Err(e) = fs::write(&target, generated) {
        panic!("failed to write {}: {}", target.display(), e);
    }
}

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string()));
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap_or_else(|_| ".".to_string()));

    generate_embedded_scenarios(&manifest_dir, &out_dir);

    let build_date = get_build_date();
    println!("cargo:rustc-env=HACKTERM_BUILD_DATE={}", build_date);

    // Only emit git SHA when NOT building with --features release
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        // Use graceful fallback if git info is unavailable
        let git_result = GitclBuilder::default().sha(true).build();

        let emit_result = match git_result {
            Ok(git) => Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit()),
            Err(e) => {
                eprintln!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        if let Err(e) = emit_result {
            // If git info fails (e.g., not in a git repo), emit fallback value
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
