//! Pulls every sprite below the root up into the root folder.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{FlattenOptions, FlattenReport, IMAGE_EXTENSION, ItemFailure};
use crate::error::Result;
use crate::fs::{ensure_root_dir, entry_exists, image_files, move_file, unique_destination};

const SEPARATOR: &str = "------------------------------";

pub fn flatten_tree(options: &FlattenOptions) -> Result<FlattenReport> {
    let root = options.root_path.as_path();
    ensure_root_dir(root)?;

    println!("\nScanning for .{IMAGE_EXTENSION} files in: {}", root.display());
    println!("{SEPARATOR}");

    let mut report = FlattenReport::default();
    // Destinations claimed by a dry run, which never appear on disk.
    let mut planned: HashSet<PathBuf> = HashSet::new();

    // Depth 1 holds the files already in the root; those stay where they are.
    for source in image_files(root, 2) {
        move_one(root, &source, options.dry_run, &mut planned, &mut report);
    }

    println!("{SEPARATOR}");
    println!("Process complete. Total files moved: {}", report.moved.len());
    Ok(report)
}

fn move_one(
    root: &Path,
    source: &Path,
    dry_run: bool,
    planned: &mut HashSet<PathBuf>,
    report: &mut FlattenReport,
) {
    let Some(file_name) = source.file_name().and_then(|n| n.to_str()) else {
        log::debug!("Skipping non UTF-8 file name: {}", source.display());
        return;
    };

    let (destination, collided) = unique_destination(root, file_name, |candidate| {
        entry_exists(candidate) || planned.contains(candidate)
    });
    if collided {
        report.duplicates += 1;
        println!("Duplicate name found: {file_name}");
        if let Some(new_name) = destination.file_name() {
            println!("  -> Renaming to: {}", new_name.to_string_lossy());
        }
    }

    if dry_run {
        println!(
            "Would move: {} -> {}",
            source.display(),
            destination.display()
        );
        planned.insert(destination.clone());
        report.moved.push((source.to_path_buf(), destination));
        return;
    }

    match move_file(source, &destination) {
        Ok(()) => {
            println!("Moved: {file_name}");
            report.moved.push((source.to_path_buf(), destination));
        }
        Err(e) => {
            println!("Error moving {file_name}: {e}");
            log::warn!("Move failed for {}: {e}", source.display());
            report.failures.push(ItemFailure::new(source, &e));
        }
    }
}
