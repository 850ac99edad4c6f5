//! Renames `"<type> - <anything>.png"` sprites to `"<type> - <folder>.png"`.

use std::fs;
use std::path::Path;

use crate::domain::{IMAGE_EXTENSION, ItemFailure, NAME_DELIMITER, RenameOptions, RenameReport};
use crate::error::Result;
use crate::fs::{ensure_root_dir, entry_exists, image_files, same_entry};

/// The name a sprite called `file_name` should have inside a folder called `folder_label`.
///
/// `None` when the name carries no delimiter and is left alone.
pub fn target_name(file_name: &str, folder_label: &str) -> Option<String> {
    let mut parts = file_name.split(NAME_DELIMITER);
    let type_label = parts.next()?;
    parts.next()?;
    Some(format!(
        "{type_label}{NAME_DELIMITER}{folder_label}.{IMAGE_EXTENSION}"
    ))
}

pub fn rename_sprites(options: &RenameOptions) -> Result<RenameReport> {
    let root = options.root_path.as_path();
    ensure_root_dir(root)?;

    println!("Scanning: {}", root.display());
    if options.dry_run {
        println!("--- DRY RUN MODE (No files will be changed) ---\n");
    } else {
        println!("--- LIVE MODE (Renaming files...) ---\n");
    }

    let mut report = RenameReport::default();
    for path in image_files(root, 1) {
        rename_one(&path, options.dry_run, &mut report);
    }

    println!("\nOperation complete. Processed {} files.", report.processed);
    Ok(report)
}

fn rename_one(path: &Path, dry_run: bool, report: &mut RenameReport) {
    let (Some(file_name), Some(parent)) = (path.file_name().and_then(|n| n.to_str()), path.parent())
    else {
        log::debug!("Skipping unusable path: {}", path.display());
        return;
    };
    let folder_label = match parent.file_name() {
        Some(label) => match label.to_str() {
            Some(label) => label,
            None => {
                log::debug!("Skipping file in non UTF-8 folder: {}", path.display());
                return;
            }
        },
        None => "",
    };

    let Some(new_name) = target_name(file_name, folder_label) else {
        log::debug!("No '{NAME_DELIMITER}' in {file_name}, leaving it");
        return;
    };
    if new_name == file_name {
        log::trace!("Already named correctly: {}", path.display());
        return;
    }

    report.processed += 1;
    let new_path = parent.join(&new_name);
    let occupied = entry_exists(&new_path) && !same_entry(path, &new_path);

    if dry_run {
        let note = if occupied { " (destination exists)" } else { "" };
        println!("[PREVIEW] Rename: '{file_name}'\n       To: '{new_name}'{note}");
        return;
    }

    if occupied {
        println!("[ERROR] Could not rename {file_name}: destination already exists");
        log::warn!("Refusing to overwrite {}", new_path.display());
        report
            .failures
            .push(ItemFailure::new(path, "destination already exists"));
        return;
    }

    match fs::rename(path, &new_path) {
        Ok(()) => {
            println!("[RENAMED] {new_name}");
            report.renamed.push((path.to_path_buf(), new_path));
        }
        Err(e) => {
            println!("[ERROR] Could not rename {file_name}: {e}");
            log::warn!("Rename failed for {}: {e}", path.display());
            report.failures.push(ItemFailure::new(path, &e));
        }
    }
}
