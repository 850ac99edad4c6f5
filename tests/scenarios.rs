use std::fs;
use std::path::Path;

use asset_tidy::domain::{FlattenOptions, PruneOptions, RenameOptions};
use asset_tidy::flatten::flatten_tree;
use asset_tidy::prune::prune_tree;
use asset_tidy::rename::rename_sprites;
use tempfile::tempdir;

fn touch(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn root_file_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().unwrap().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn prune_removes_snow_high_and_exact_yellow_only() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("Snow - High Detail/Spruce.png"), b"x");
    touch(&root.join("yellow/Spruce.png"), b"x");
    touch(&root.join("Yellow Leaves/Spruce.png"), b"x");

    let report = prune_tree(&PruneOptions {
        root_path: root.to_path_buf(),
        dry_run: false,
    })
    .unwrap();

    assert_eq!(report.deleted.len(), 2);
    assert!(!root.join("Snow - High Detail").exists());
    assert!(!root.join("yellow").exists());
    assert!(root.join("Yellow Leaves/Spruce.png").exists());
}

#[test]
fn rename_uses_folder_name_and_is_idempotent() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(
        &root.join("Cold/Large Spruce - Medium Snow - Spritesheet.png"),
        b"sheet",
    );
    touch(&root.join("Cold/Notes.png"), b"x");

    let options = RenameOptions {
        root_path: root.to_path_buf(),
        dry_run: false,
    };
    let first = rename_sprites(&options).unwrap();
    assert_eq!(first.processed, 1);
    assert_eq!(
        fs::read(root.join("Cold/Large Spruce - Cold.png")).unwrap(),
        b"sheet"
    );
    assert!(root.join("Cold/Notes.png").exists());

    let second = rename_sprites(&options).unwrap();
    assert_eq!(second.processed, 0);
    assert!(second.renamed.is_empty());
}

#[test]
fn flatten_moves_nested_sprites_once() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("A/red/Oak - red.png"), b"red");
    touch(&root.join("A/blue/Oak - blue.png"), b"blue");

    let options = FlattenOptions {
        root_path: root.to_path_buf(),
        dry_run: false,
        pause_on_exit: false,
    };
    let first = flatten_tree(&options).unwrap();
    assert_eq!(first.moved.len(), 2);
    assert_eq!(first.duplicates, 0);
    assert_eq!(
        root_file_names(root),
        vec!["Oak - blue.png".to_string(), "Oak - red.png".to_string()]
    );

    let second = flatten_tree(&options).unwrap();
    assert!(second.moved.is_empty());
}

#[test]
fn flatten_never_overwrites_root_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("Pine.png"), b"original");
    touch(&root.join("Pine_1.png"), b"also original");
    touch(&root.join("x/Pine.png"), b"nested x");
    touch(&root.join("y/z/Pine.png"), b"nested z");

    let report = flatten_tree(&FlattenOptions {
        root_path: root.to_path_buf(),
        dry_run: false,
        pause_on_exit: false,
    })
    .unwrap();

    assert_eq!(report.moved.len(), 2);
    assert_eq!(report.duplicates, 2);
    assert!(report.failures.is_empty());
    assert_eq!(fs::read(root.join("Pine.png")).unwrap(), b"original");
    assert_eq!(fs::read(root.join("Pine_1.png")).unwrap(), b"also original");
    assert_eq!(fs::read(root.join("Pine_2.png")).unwrap(), b"nested x");
    assert_eq!(fs::read(root.join("Pine_3.png")).unwrap(), b"nested z");
}
