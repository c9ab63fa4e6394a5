pub mod commands;
mod process_command;

pub use process_command::{process_cli, process_command};
