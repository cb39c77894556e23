pub mod command_utils;

pub use command_utils::{execute_command, find_command_path};
