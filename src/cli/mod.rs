//! CLI command implementations

pub mod add;
pub mod complete;
pub mod definition;
pub mod delete;
pub mod list;
pub mod repl;

pub use definition::{Cli, Commands};

use crate::task::Task;

/// Parse a task id the way users type them: a plain base-ten number.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

/// Print tasks one per line under a count heading.
pub fn print_task_list(heading: &str, tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    println!("{} ({}):", heading, tasks.len());
    for task in tasks {
        println!("  {}", task);
    }
}
