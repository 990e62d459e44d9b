use crate::config::Config;
use crate::error::{LstError, Result};
use crate::filter::DotfilesMode;
use clap::{App, Arg, ArgGroup, ArgMatches, SubCommand};
use clap_complete::Shell;
use std::path::PathBuf;

pub struct Args {
    pub paths: Vec<PathBuf>,
    pub dotfiles_mode: DotfilesMode,
    pub recursive: bool,
    pub one_per_line: bool,
    pub command: Option<Command>,
}

pub enum Command {
    InitConfig,
    GenerateCompletion(Shell),
}

impl Args {
    pub fn build_cli() -> App<'static> {
        App::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .arg(
                Arg::with_name("paths")
                    .help("The directories to list")
                    .index(1)
                    .multiple_values(true)
                    .default_value("."),
            )
            .arg(
                Arg::with_name("all")
                    .short('a')
                    .long("all")
                    .help("Show hidden entries plus the . and .. entries"),
            )
            .arg(
                Arg::with_name("almost-all")
                    .short('A')
                    .long("almost-all")
                    .help("Show hidden entries, but not . and .."),
            )
            .group(
                ArgGroup::new("dotfiles")
                    .args(&["all", "almost-all"])
                    .multiple(false),
            )
            .arg(
                Arg::with_name("recursive")
                    .short('R')
                    .long("recursive")
                    .help("List subdirectories recursively"),
            )
            .arg(
                Arg::with_name("oneline")
                    .short('1')
                    .long("oneline")
                    .help("List one entry per line"),
            )
            .subcommand(SubCommand::with_name("init").about("Initialize the configuration file"))
            .subcommand(
                SubCommand::with_name("completion")
                    .about("Generate shell completion scripts")
                    .arg(
                        Arg::with_name("shell")
                            .possible_values(&["bash", "elvish", "fish", "powershell", "zsh"])
                            .required(true)
                            .help("The shell to generate completions for"),
                    ),
            )
    }

    pub fn parse(config: &Config) -> Result<Self> {
        let matches = Self::build_cli().get_matches();
        Self::from_matches(&matches, config)
    }

    fn from_matches(matches: &ArgMatches, config: &Config) -> Result<Self> {
        let command = if matches.subcommand_matches("init").is_some() {
            Some(Command::InitConfig)
        } else if let Some(completion) = matches.subcommand_matches("completion") {
            let shell = completion
                .value_of("shell")
                .ok_or_else(|| LstError::Parse("missing shell argument".to_string()))?
                .parse::<Shell>()
                .map_err(LstError::Parse)?;
            Some(Command::GenerateCompletion(shell))
        } else {
            None
        };

        let config_mode = DotfilesMode::from_config_value(&config.dotfiles).ok_or_else(|| {
            LstError::Config(format!(
                "invalid dotfiles mode '{}' (expected hide, almost-all or all)",
                config.dotfiles
            ))
        })?;
        let dotfiles_mode = if matches.is_present("all") {
            DotfilesMode::ShowAll
        } else if matches.is_present("almost-all") {
            DotfilesMode::ShowAlmostAll
        } else {
            config_mode
        };

        let config_lines = match config.default_layout.as_str() {
            "columns" => false,
            "lines" => true,
            other => {
                return Err(LstError::Config(format!(
                    "invalid default_layout '{}' (expected columns or lines)",
                    other
                )))
            }
        };

        Ok(Args {
            paths: matches
                .values_of("paths")
                .map(|values| values.map(PathBuf::from).collect())
                .unwrap_or_else(|| vec![PathBuf::from(".")]),
            dotfiles_mode,
            recursive: matches.is_present("recursive") || config.recursive,
            one_per_line: matches.is_present("oneline") || config_lines,
            command,
        })
    }
}
