use crate::commands::args::{Args, Command};
use crate::config::Config;
use crate::error::Result;
use crate::filter::{visible_children, DotfilesMode};
use crate::formatter::{render, ColumnFormatter, FileFormatter, Listing, OneLineFormatter};
use crate::fs::{DiskFs, Filesystem};
use crate::lister::{BasicLister, FileLister, RecursiveLister};
use std::io::{self, Write};
use std::path::PathBuf;

pub fn handle_command(args: &Args, config: &Config) -> Result<()> {
    match &args.command {
        Some(Command::InitConfig) => init_config(config),
        Some(Command::GenerateCompletion(shell)) => generate_completion(*shell),
        None => list_directories(args),
    }
}

fn list_directories(args: &Args) -> Result<()> {
    let text = list_paths(
        &DiskFs,
        &args.paths,
        args.dotfiles_mode,
        args.recursive,
        args.one_per_line,
    )?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(text.as_bytes())?;
    handle.flush()?;
    Ok(())
}

/// The listing pipeline: traversal, visibility filtering, rendering. The
/// whole text is assembled before anything is written, so a failure on any
/// listed path produces no output at all.
pub fn list_paths(
    fs: &dyn Filesystem,
    roots: &[PathBuf],
    mode: DotfilesMode,
    recursive: bool,
    one_per_line: bool,
) -> Result<String> {
    let lister: Box<dyn FileLister> = if recursive {
        Box::new(RecursiveLister)
    } else {
        Box::new(BasicLister)
    };
    let listed = lister.list_paths(fs, roots)?;

    let mut listings = Vec::with_capacity(listed.len());
    for path in &listed {
        listings.push(Listing {
            path: fs.canonical(path)?,
            names: visible_children(fs, path, mode)?,
        });
    }

    let formatter: Box<dyn FileFormatter> = if one_per_line {
        Box::new(OneLineFormatter)
    } else {
        Box::new(ColumnFormatter)
    };
    Ok(render(listings, formatter.as_ref()))
}

fn init_config(config: &Config) -> Result<()> {
    let path = Config::get_config_path();
    config.save(&path)?;
    println!("Config file created at {}", path.display());
    Ok(())
}

fn generate_completion(shell: clap_complete::Shell) -> Result<()> {
    let mut app = Args::build_cli();
    clap_complete::generate(shell, &mut app, env!("CARGO_PKG_NAME"), &mut io::stdout());
    Ok(())
}
