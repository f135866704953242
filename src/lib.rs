//! Tasker library - core functionality for the command-line task tracker

pub mod cli;
pub mod task;
