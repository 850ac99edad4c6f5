use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use simplelog::LevelFilter;

use crate::domain::{FlattenOptions, PruneOptions, RenameOptions};
use crate::error::Result;

pub mod domain;
pub mod error;
pub mod flatten;
pub mod fs;
pub mod prompt;
pub mod prune;
pub mod rename;

/// Batch clean-up of sprite asset folders.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete "snow/high" and "yellow" variant folders from a tree
    Prune {
        /// Folder to clean up
        #[arg(short, long)]
        root: PathBuf,

        /// Report what would be deleted without deleting it
        #[arg(long)]
        dry_run: bool,
    },
    /// Rename "<type> - <variant>.png" sprites after their parent folder
    Rename {
        /// Folder holding the sprites
        #[arg(short, long)]
        root: PathBuf,

        /// Preview the renames without touching any file
        #[arg(long)]
        dry_run: bool,
    },
    /// Move every .png below the root up into the root
    Flatten {
        /// Main folder; asked for on the terminal when omitted
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Report the moves without performing them
        #[arg(long)]
        dry_run: bool,

        /// Exit without waiting for Enter
        #[arg(long)]
        no_pause: bool,
    },
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Prune { root, dry_run } => {
            let report = prune::prune_tree(&PruneOptions {
                root_path: root,
                dry_run,
            })?;
            log::info!(
                "Prune finished: {} deleted, {} failed",
                report.deleted.len(),
                report.failures.len()
            );
        }
        Command::Rename { root, dry_run } => {
            let report = rename::rename_sprites(&RenameOptions {
                root_path: root,
                dry_run,
            })?;
            log::info!(
                "Rename finished: {} processed, {} renamed, {} failed",
                report.processed,
                report.renamed.len(),
                report.failures.len()
            );
        }
        Command::Flatten {
            root,
            dry_run,
            no_pause,
        } => {
            println!("--- PNG Organiser ---");
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();

            let root_path = match root {
                Some(root) => root,
                None => prompt::read_root_path(&mut input, &mut output)?,
            };
            let options = FlattenOptions {
                root_path,
                dry_run,
                pause_on_exit: !no_pause,
            };
            let report = flatten::flatten_tree(&options)?;
            log::info!(
                "Flatten finished: {} moved, {} renamed on collision, {} failed",
                report.moved.len(),
                report.duplicates,
                report.failures.len()
            );
            if options.pause_on_exit {
                prompt::wait_for_enter(&mut input, &mut output)?;
            }
        }
    }
    Ok(())
}
