//! `tasker complete` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args)]
pub struct CompleteArgs {
    /// Id of the task to mark as completed
    id: u64,
}

pub fn run(file: &Path, args: CompleteArgs) -> Result<()> {
    let mut store = TaskStore::open(file);

    if !store.complete_task(args.id) {
        bail!("Task {} not found", args.id);
    }

    println!("✓ Completed task {}", args.id);
    Ok(())
}
