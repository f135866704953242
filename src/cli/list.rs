//! `tasker list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args)]
pub struct ListArgs {
    /// Show only tasks that are not completed yet
    #[arg(long)]
    pending: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(file: &Path, args: ListArgs) -> Result<()> {
    let store = TaskStore::open(file);
    let tasks = store.list_tasks(!args.pending);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let heading = if args.pending { "Pending tasks" } else { "Tasks" };
    super::print_task_list(heading, &tasks);
    Ok(())
}
