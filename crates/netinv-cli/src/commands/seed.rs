//! Seed import command
//!
//! Usage: netinv seed import <PATH> [--db PATH]

use anyhow::Context;
use clap::{Args, Subcommand};
use netinv_store::seed::import_seed_file;
use std::path::{Path, PathBuf};

use super::{open_database, StoreArgs};

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file (or a directory of seed files) into the database
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a seed YAML/JSON file or directory
    pub path: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> anyhow::Result<()> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args),
    }
}

fn is_seed_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml" | "json"))
}

/// Seed files to import, sorted for determinism
fn seed_files(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .with_context(|| format!("reading {}", path.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_seed_file(p))
        .collect();
    files.sort();
    Ok(files)
}

fn execute_import(args: ImportArgs) -> anyhow::Result<()> {
    let config = args.store.load_config()?;
    let db = open_database(&config)?;
    let mut conn = db.connect()?;

    for file in seed_files(&args.path)? {
        println!("Importing {}...", file.display());
        let report = import_seed_file(&file, &mut conn)
            .with_context(|| format!("importing {}", file.display()))?;
        println!(
            "Imported {} records (digest: {})",
            report.created, report.digest
        );
    }

    Ok(())
}
