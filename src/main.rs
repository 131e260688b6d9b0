mod db;
mod ledger;
mod models;
mod run;
mod stats;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" | "version" => {
                println!("ledgertui {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => {
                print_usage();
                anyhow::bail!("Unknown argument: {other}");
            }
        }
    }

    let db_path = get_db_path()?;
    let store = db::KvStore::open(&db_path)?;
    let mut ledger = ledger::Ledger::load(store);
    run::as_tui(&mut ledger)
}

fn print_usage() {
    println!("LedgerTUI — local-only income and expense ledger");
    println!();
    println!("Usage: ledgertui");
    println!();
    println!("Launches the interactive TUI; all data stays on this machine.");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "ledgertui", "LedgerTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("ledgertui.db"))
}
