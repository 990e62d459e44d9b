pub mod args;
pub mod command_handler;
