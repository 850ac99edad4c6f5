use std::path::{Path, PathBuf};

/// Extension (without the dot) of the sprite images every operation works on.
pub const IMAGE_EXTENSION: &str = "png";
const IMAGE_SUFFIX: &str = ".png";

/// Separator between the tree type and the variant in a sprite filename.
pub const NAME_DELIMITER: &str = " - ";

#[derive(Debug, Clone)]
pub struct PruneOptions {
    pub root_path: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub root_path: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct FlattenOptions {
    pub root_path: PathBuf,
    pub dry_run: bool,
    pub pause_on_exit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl ItemFailure {
    pub fn new(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PruneReport {
    /// Folders deleted, or in a dry run the folders that would be.
    pub deleted: Vec<PathBuf>,
    pub failures: Vec<ItemFailure>,
}

#[derive(Debug, Default)]
pub struct RenameReport {
    /// Files whose target name differed from the current one, including failed attempts.
    pub processed: usize,
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub failures: Vec<ItemFailure>,
}

#[derive(Debug, Default)]
pub struct FlattenReport {
    pub moved: Vec<(PathBuf, PathBuf)>,
    /// Candidates whose original name was already taken at the root.
    pub duplicates: usize,
    pub failures: Vec<ItemFailure>,
}

pub fn normalized_name(name: &str) -> String {
    name.to_lowercase().trim().to_string()
}

pub fn is_image_name(name: &str) -> bool {
    let name = name.as_bytes();
    name.len() >= IMAGE_SUFFIX.len()
        && name[name.len() - IMAGE_SUFFIX.len()..].eq_ignore_ascii_case(IMAGE_SUFFIX.as_bytes())
}

pub fn is_image_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(is_image_name)
}
