mod appender;
mod document;
mod entry;
mod patch;
mod pruner;

use clap::Parser;
use document::Document;
use patch::Patch;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-patch",
    about = "Remove and append entries in a catalog source file"
)]
struct Args {
    /// Catalog file to edit
    catalog: PathBuf,

    /// TOML file listing ids to remove and entries to add
    #[arg(long, default_value = "patch.toml")]
    patch: PathBuf,

    /// Apply the patch in memory and report, without writing
    #[arg(long)]
    dry_run: bool,

    /// Treat unmatched removal ids or a missing array terminator as errors
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Default)]
struct Outcome {
    removed: usize,
    missed: Vec<String>,
    added: usize,
    terminator_missing: bool,
}

/// Runs the whole edit sequence against the in-memory document: one prune
/// per removal id, then a single append of all new entries. Misses are
/// collected for the summary rather than reported per key.
fn apply_patch(doc: &mut Document, patch: &Patch) -> Outcome {
    let mut outcome = Outcome::default();

    for key in &patch.remove {
        // Each prune recomputes positions against the current text, so the
        // removal order does not matter.
        match pruner::prune(&doc.text, key) {
            Some(next) => {
                doc.replace_text(next);
                outcome.removed += 1;
            }
            None => outcome.missed.push(key.clone()),
        }
    }

    if !patch.add.is_empty() {
        match appender::append(&doc.text, &patch.add) {
            Some(next) => {
                doc.replace_text(next);
                outcome.added = patch.add.len();
            }
            None => outcome.terminator_missing = true,
        }
    }

    outcome
}

/// Strict mode turns the two silent miss classes into errors for operator
/// review; the permissive default only mentions them in the summary.
fn check_strict(outcome: &Outcome) -> Result<(), String> {
    if !outcome.missed.is_empty() {
        return Err(format!(
            "No catalog entry found for: {}",
            outcome.missed.join(", ")
        ));
    }
    if outcome.terminator_missing {
        return Err("Catalog array terminator not found, nothing appended".to_string());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let patch = Patch::load(&args.patch)?;
    if patch.is_empty() {
        println!("Patch \"{}\" is empty, nothing to do", args.patch.display());
        return Ok(());
    }

    let mut doc = Document::from_file(args.catalog.clone())?;
    let outcome = apply_patch(&mut doc, &patch);

    if args.strict {
        check_strict(&outcome)?;
    }

    let mut summary = format!(
        "Removed {} of {}, added {} of {}",
        outcome.removed,
        patch.remove.len(),
        outcome.added,
        patch.add.len()
    );
    if !outcome.missed.is_empty() {
        summary.push_str(&format!(" (no match: {})", outcome.missed.join(", ")));
    }
    if outcome.terminator_missing {
        summary.push_str(" (array terminator not found)");
    }

    if args.dry_run {
        println!("{summary} (dry run, not written)");
    } else if doc.modified {
        let bytes = doc.save()?;
        println!("{summary}, \"{}\" {bytes}B written", args.catalog.display());
    } else {
        println!("{summary}, catalog unchanged");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CATALOG: &str = "export const games = [\n  {\n    id: 'space-invaders',\n    title: 'Space Invaders Extreme',\n    isImplemented: true,\n    color: '#0aff9d'\n  },\n  {\n    id: 'neon-pong',\n    title: 'Neon Pong 3D',\n    isImplemented: true,\n    color: '#7000ff'\n  }\n];\n";

    const PATCH: &str = r##"
remove = ["neon-pong", "never-existed"]

[[add]]
id = "slope"
title = "Slope"
description = "Fast reflex downhill runner"
category = "Runner"
difficulty = "Hard"
color = "#ff0099"
"##;

    #[test]
    fn test_apply_patch_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.ts");
        fs::write(&path, CATALOG).unwrap();

        let patch: Patch = toml::from_str(PATCH).unwrap();
        let mut doc = Document::from_file(path.clone()).unwrap();
        let outcome = apply_patch(&mut doc, &patch);

        assert_eq!(outcome.removed, 1);
        assert_eq!(outcome.missed, vec!["never-existed".to_string()]);
        assert_eq!(outcome.added, 1);
        assert!(!outcome.terminator_missing);

        doc.save().unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("neon-pong"));
        assert!(written.contains("space-invaders"));
        assert!(written.contains("id: 'slope'"));
        assert!(written.ends_with("  },\n];\n"));
    }

    #[test]
    fn test_apply_patch_is_idempotent_for_removals() {
        let patch: Patch = toml::from_str("remove = [\"neon-pong\"]").unwrap();

        let mut doc = Document::from_text(CATALOG);
        let first = apply_patch(&mut doc, &patch);
        assert_eq!(first.removed, 1);

        let after_first = doc.text.clone();
        let second = apply_patch(&mut doc, &patch);
        assert_eq!(second.removed, 0);
        assert_eq!(second.missed, vec!["neon-pong".to_string()]);
        assert_eq!(doc.text, after_first);
    }

    #[test]
    fn test_strict_rejects_unmatched_ids() {
        let outcome = Outcome {
            removed: 1,
            missed: vec!["gone".to_string(), "also-gone".to_string()],
            ..Outcome::default()
        };
        let err = check_strict(&outcome).unwrap_err();
        assert!(err.contains("gone, also-gone"));
    }

    #[test]
    fn test_strict_rejects_missing_terminator() {
        let outcome = Outcome {
            terminator_missing: true,
            ..Outcome::default()
        };
        let err = check_strict(&outcome).unwrap_err();
        assert!(err.contains("terminator"));
    }

    #[test]
    fn test_clean_outcome_passes_strict() {
        let outcome = Outcome {
            removed: 2,
            added: 1,
            ..Outcome::default()
        };
        assert!(check_strict(&outcome).is_ok());
    }

    #[test]
    fn test_misses_are_not_fatal_by_default() {
        let patch: Patch = toml::from_str("remove = [\"never-existed\"]").unwrap();
        let mut doc = Document::from_text(CATALOG);
        let outcome = apply_patch(&mut doc, &patch);

        // The miss is only recorded; without --strict nothing escalates it.
        assert_eq!(outcome.missed, vec!["never-existed".to_string()]);
        assert_eq!(doc.text, CATALOG);
        assert!(!doc.modified);
    }

    #[test]
    fn test_missing_terminator_reported_not_fatal() {
        let patch: Patch = toml::from_str(PATCH).unwrap();
        let mut doc = Document::from_text("not an array at all");
        let outcome = apply_patch(&mut doc, &patch);

        assert_eq!(outcome.removed, 0);
        assert!(outcome.terminator_missing);
        assert_eq!(doc.text, "not an array at all");
    }
}
