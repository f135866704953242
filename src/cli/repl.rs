//! Interactive mode, entered when no subcommand is given
//!
//! One task store is opened for the whole session; every mutating command
//! goes through it and is saved as it happens.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::task::TaskStore;

const HELP: &str = "\
Commands:
  add <description>    Add a new task
  list                 List all tasks
  list-pending         List only pending tasks
  complete <id>        Mark a task as completed
  delete <id>          Delete a task
  help                 Show this help message
  quit                 Exit

Examples:
  add Buy groceries
  complete 1
  delete 2";

/// What the loop should do after a dispatched line
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run(file: &Path) -> Result<()> {
    let mut store = TaskStore::open(file);

    println!("tasker interactive mode");
    println!("Type 'help' for commands, 'quit' to exit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        match lines.next() {
            Some(line) => {
                if dispatch(&mut store, &line?) == Flow::Quit {
                    break;
                }
            }
            // End of input counts as quit.
            None => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn dispatch(store: &mut TaskStore, line: &str) -> Flow {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Flow::Continue;
    }

    let action = words[0].to_lowercase();
    let args = &words[1..];

    match action.as_str() {
        "quit" | "exit" => return Flow::Quit,
        "help" => println!("{}", HELP),
        "add" => {
            if args.is_empty() {
                println!("Usage: add <description>");
            } else {
                let task = store.add_task(args.join(" "));
                println!("✓ Added task: {}", task);
            }
        }
        "list" => super::print_task_list("Tasks", &store.list_tasks(true)),
        "list-pending" => super::print_task_list("Pending tasks", &store.list_tasks(false)),
        "complete" => {
            if let Some(id) = expect_id(args, "complete <id>") {
                if store.complete_task(id) {
                    println!("✓ Completed task {}", id);
                } else {
                    println!("Task {} not found", id);
                }
            }
        }
        "delete" => {
            if let Some(id) = expect_id(args, "delete <id>") {
                if store.delete_task(id) {
                    println!("✓ Deleted task {}", id);
                } else {
                    println!("Task {} not found", id);
                }
            }
        }
        other => {
            println!("Unknown command: {}", other);
            println!("Type 'help' for available commands");
        }
    }

    Flow::Continue
}

/// Expect exactly one id argument, reporting usage or parse problems.
fn expect_id(args: &[&str], usage: &str) -> Option<u64> {
    if args.len() != 1 {
        println!("Usage: {}", usage);
        return None;
    }

    match super::parse_id(args[0]) {
        Some(id) => Some(id),
        None => {
            println!("Task ID must be a number");
            None
        }
    }
}
