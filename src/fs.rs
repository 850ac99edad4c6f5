use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::is_image_path;
use crate::error::{Result, TidyError};

pub fn ensure_root_dir(root: &Path) -> Result<()> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TidyError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Err(e) => return Err(TidyError::io(root, e)),
    };
    if !metadata.is_dir() {
        return Err(TidyError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

/// Immediate subdirectories of `dir`, sorted by name. Symlinks are not followed.
pub fn child_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if entry.path_is_symlink() {
            log::debug!("Not following symlinked entry: {}", entry.path().display());
            continue;
        }
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Image files at `min_depth` or deeper below `root` (depth 1 is the root's own files).
///
/// Unreadable directories are logged and skipped, the rest of the tree is still collected.
pub fn image_files(root: &Path, min_depth: usize) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(min_depth).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        if entry.path_is_symlink() {
            log::debug!("Not following symlinked entry: {}", entry.path().display());
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }
        if is_image_path(entry.path()) {
            log::trace!("Found image: {}", entry.path().display());
            files.push(entry.into_path());
        } else {
            log::trace!("Ignoring non-image: {}", entry.path().display());
        }
    }
    files
}

pub fn suffixed_name(name: &str, n: usize) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{}_{n}{}", &name[..dot], &name[dot..]),
        _ => format!("{name}_{n}"),
    }
}

/// Picks a destination for `name` inside `dir` that `is_taken` does not report as used.
///
/// Returns the chosen path and whether the original name was already taken.
/// The counter starts at 1 and the first free value wins.
pub fn unique_destination(
    dir: &Path,
    name: &str,
    is_taken: impl Fn(&Path) -> bool,
) -> (PathBuf, bool) {
    let direct = dir.join(name);
    if !is_taken(&direct) {
        return (direct, false);
    }
    let mut counter = 1;
    loop {
        let candidate = dir.join(suffixed_name(name, counter));
        if !is_taken(&candidate) {
            return (candidate, true);
        }
        counter += 1;
    }
}

pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Whether both paths name the same directory entry, e.g. two spellings on a case-insensitive volume.
#[cfg(unix)]
pub fn same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
pub fn same_entry(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Moves a file, copying then removing the source when a plain rename would cross devices.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "Rename across devices, copying instead: {} -> {}",
                source.display(),
                destination.display()
            );
            fs::copy(source, destination)?;
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}
