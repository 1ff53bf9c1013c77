//! Hygiene — enforces coding standards at test time.
//!
//! Scans `client/src/` for constructs the frontend must never contain.
//! Panicking paths would crash the page script; assigning `onload`
//! clobbers other load handlers where `addEventListener` appends.

use std::fs;
use std::path::Path;

/// Pattern, maximum occurrences, and why it is banned.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics crash the page script"),
    (".expect(", 0, "panics crash the page script"),
    ("panic!(", 0, "panics crash the page script"),
    ("unreachable!(", 0, "panics crash the page script"),
    ("todo!(", 0, "unfinished logic must not ship"),
    ("unimplemented!(", 0, "unfinished logic must not ship"),
    ("set_onload(", 0, "use add_event_listener_with_callback so other load handlers survive"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        // Sibling test modules are exempt.
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn source_stays_within_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    for &(pattern, max, reason) in BUDGETS {
        let mut violations = Vec::new();
        for (path, content) in &files {
            for line in content.lines().filter(|line| line.contains(pattern)) {
                violations.push(format!("  {path}: {}", line.trim()));
            }
        }
        assert!(
            violations.len() <= max,
            "{pattern} budget exceeded ({} > {max}): {reason}\n{}",
            violations.len(),
            violations.join("\n")
        );
    }
}
