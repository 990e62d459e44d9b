mod commands;
mod config;
mod error;
mod filter;
mod formatter;
mod fs;
mod lister;

use commands::args::Args;
use commands::command_handler::handle_command;
use config::Config;
use error::{LstError, Result};

fn main() {
    if let Err(e) = run() {
        print_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::load(&Config::get_config_path())?;
    let args = Args::parse(&config)?;
    handle_command(&args, &config)
}

fn print_error(error: &LstError) {
    use colored::Colorize;

    let error_type = match error {
        LstError::Io(_) => "IO Error",
        LstError::Parse(_) => "Parse Error",
        LstError::Config(_) => "Config Error",
        LstError::InvalidPath(_) => "Path Error",
    };

    eprintln!("{} {}", "✗".bright_red(), error_type.bright_red().bold());
    let message = error.to_string();
    for line in message.lines() {
        eprintln!("  {}", line);
    }
}
