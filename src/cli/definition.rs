//! Clap command-line definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::complete::CompleteArgs;
use super::delete::DeleteArgs;
use super::list::ListArgs;

#[derive(Parser)]
#[command(name = "tasker", version, about = "Track tasks from the terminal")]
pub struct Cli {
    /// Tasks file to use
    #[arg(long, global = true, env = "TASKER_FILE", default_value = "tasks.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List tasks
    List(ListArgs),

    /// Mark a task as completed
    Complete(CompleteArgs),

    /// Delete a task
    Delete(DeleteArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
