//! Source discipline lock tests for the `address-index` crate.
//!
//! Proves:
//! 1. No `unwrap()`/`expect()` in library or binary code outside test modules
//! 2. Only the binary entry point writes to stdout
//! 3. Every dependency of the lock-tests crate is referenced by its sources

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Panicking calls forbidden in non-test source lines.
const FORBIDDEN_PATTERNS: &[&str] = &[".unwrap()", ".expect("];

/// Stdout writers allowed only in `main.rs`.
const STDOUT_PATTERNS: &[&str] = &["println!", "print!(", "std::io::stdout"];

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn lookup_sources() -> Vec<PathBuf> {
    let src = workspace_root().join("lookup").join("src");
    let mut files: Vec<PathBuf> = fs::read_dir(&src)
        .unwrap_or_else(|e| panic!("read {}: {e}", src.display()))
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|e| e == "rs"))
        .collect();
    files.sort();
    assert!(!files.is_empty(), "no sources under {}", src.display());
    files
}

/// Non-comment lines preceding the first `#[cfg(test)]`, with line numbers.
fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let content = fs::read_to_string(path).unwrap();
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !(trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*'))
        })
        .map(|(no, line)| (no + 1, line.to_string()))
        .collect()
}

fn scan(patterns: &[&str], skip: impl Fn(&Path) -> bool) -> Vec<(String, usize, String)> {
    let mut violations = Vec::new();
    for path in lookup_sources() {
        if skip(&path) {
            continue;
        }
        for (line_no, line) in production_lines(&path) {
            if patterns.iter().any(|p| line.contains(p)) {
                violations.push((path.display().to_string(), line_no, line));
            }
        }
    }
    violations
}

fn fail_with(header: &str, violations: &[(String, usize, String)]) {
    if !violations.is_empty() {
        let mut msg = format!("{header}:\n");
        for (file, line, content) in violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn lookup_source_has_no_panicking_calls() {
    let violations = scan(FORBIDDEN_PATTERNS, |_| false);
    fail_with("unwrap/expect found in address-index source", &violations);
}

#[test]
fn only_main_writes_to_stdout() {
    let violations = scan(STDOUT_PATTERNS, |p| p.ends_with("main.rs"));
    fail_with("stdout writes outside main.rs", &violations);
}

/// Dependency names declared in a `Cargo.toml` dependency table, as crate
/// identifiers (`-` mapped to `_`).
fn declared_dependencies(cargo_toml: &str) -> Vec<String> {
    let mut deps = Vec::new();
    let mut in_table = false;
    for line in cargo_toml.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_table = matches!(trimmed, "[dependencies]" | "[dev-dependencies]");
            continue;
        }
        if in_table {
            if let Some((name, _)) = trimmed.split_once('=') {
                deps.push(name.trim().replace('-', "_"));
            }
        }
    }
    deps
}

fn collect_rs(dir: &Path, out: &mut String) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push_str(&fs::read_to_string(&path).unwrap());
        }
    }
}

#[test]
fn lock_crate_dependencies_are_all_used() {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let manifest = fs::read_to_string(crate_dir.join("Cargo.toml")).unwrap();
    let deps = declared_dependencies(&manifest);
    assert!(deps.iter().any(|d| d == "address_index"), "deps={deps:?}");

    let mut sources = String::new();
    collect_rs(&crate_dir.join("src"), &mut sources);
    collect_rs(&crate_dir.join("tests"), &mut sources);

    let unused: Vec<&String> = deps
        .iter()
        .filter(|d| !sources.contains(&format!("{d}::")))
        .collect();
    assert!(unused.is_empty(), "unused lock-tests dependencies: {unused:?}");
}
