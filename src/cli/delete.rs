//! `tasker delete` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    id: u64,
}

pub fn run(file: &Path, args: DeleteArgs) -> Result<()> {
    let mut store = TaskStore::open(file);

    if !store.delete_task(args.id) {
        bail!("Task {} not found", args.id);
    }

    println!("✓ Deleted task {}", args.id);
    Ok(())
}
