//! `tasker add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args)]
pub struct AddArgs {
    /// Task description; several words are joined with spaces
    #[arg(required = true)]
    description: Vec<String>,
}

pub fn run(file: &Path, args: AddArgs) -> Result<()> {
    let mut store = TaskStore::open(file);
    let task = store.add_task(args.description.join(" "));

    println!("✓ Added task: {}", task);
    Ok(())
}
