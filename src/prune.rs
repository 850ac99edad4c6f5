//! Deletes unwanted variant folders from a sprite pack.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{ItemFailure, PruneOptions, PruneReport, normalized_name};
use crate::error::Result;
use crate::fs::{child_dirs, ensure_root_dir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneRule {
    ContainsAll(&'static [&'static str]),
    Equals(&'static str),
}

impl PruneRule {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            PruneRule::ContainsAll(needles) => needles.iter().all(|n| normalized.contains(n)),
            PruneRule::Equals(expected) => normalized == *expected,
        }
    }
}

/// Folders removed by `prune`: any "snow ... high" variant, and plain "yellow".
pub const PRUNE_RULES: &[PruneRule] = &[
    PruneRule::ContainsAll(&["snow", "high"]),
    PruneRule::Equals("yellow"),
];

pub fn should_prune(dir_name: &str) -> bool {
    let normalized = normalized_name(dir_name);
    PRUNE_RULES.iter().any(|rule| rule.matches(&normalized))
}

pub fn prune_tree(options: &PruneOptions) -> Result<PruneReport> {
    let root = options.root_path.as_path();
    ensure_root_dir(root)?;

    println!("Starting cleanup in: {}", root.display());
    let mut report = PruneReport::default();

    let mut work_list: Vec<PathBuf> = vec![root.to_path_buf()];
    while let Some(current) = work_list.pop() {
        let children = match child_dirs(&current) {
            Ok(children) => children,
            Err(e) => {
                log::warn!("Could not list {}: {e}", current.display());
                continue;
            }
        };

        let mut descend = Vec::with_capacity(children.len());
        for child in children {
            if prune_child(&child, options.dry_run, &mut report) {
                continue;
            }
            descend.push(child);
        }
        // Reversed so the first child by name is visited next.
        work_list.extend(descend.into_iter().rev());
    }

    println!("\nCleanup Complete! Deleted {} folders.", report.deleted.len());
    Ok(report)
}

/// Returns true when `dir` was removed (or would be, in a dry run) and must not be descended into.
fn prune_child(dir: &Path, dry_run: bool, report: &mut PruneReport) -> bool {
    let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
        log::debug!("Skipping folder with non UTF-8 name: {}", dir.display());
        return false;
    };
    if !should_prune(name) {
        log::trace!("Keeping {}", dir.display());
        return false;
    }

    if dry_run {
        println!("Would delete: {}", dir.display());
        report.deleted.push(dir.to_path_buf());
        return true;
    }

    println!("Deleting: {}", dir.display());
    match fs::remove_dir_all(dir) {
        Ok(()) => {
            report.deleted.push(dir.to_path_buf());
            true
        }
        Err(e) => {
            println!("FAILED to delete {}. Reason: {e}", dir.display());
            log::warn!("Delete failed for {}: {e}", dir.display());
            report.failures.push(ItemFailure::new(dir, &e));
            false
        }
    }
}
