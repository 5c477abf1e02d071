// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use quill_core::{APP_NAME, Session};
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_repl::CmdRepl;
use crate::cmd_run::CmdRun;
use crate::config::parse_config;

/// Environment variable holding the log filter, e.g. `QUILL_LOG=debug`.
const QUILL_LOG_ENV: &str = "QUILL_LOG";

/// Run the Quill command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run() {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs go to stderr so that replies on stdout stay clean.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(QUILL_LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Path to the task file, overriding the configuration
    pub data_file: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Quill - keep your to-dos, deadlines and events in one plain text file.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to repl
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/quill/config.toml on Linux and MacOS, \
%APPDATA%/quill/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-f --"data-file" [FILE] "Path to the task file")
                    .long_help(
                        "\
Path to the task file, overriding `data_path` in the configuration. Defaults to \
$XDG_DATA_HOME/quill/tasks.txt.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdRepl::command())
            .subcommand(CmdRun::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdRepl::NAME, _)) => Repl(CmdRepl),
            Some((CmdRun::NAME, matches)) => Run(CmdRun::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Repl(CmdRepl),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        let data_file = matches.get_one("data-file").cloned();
        Ok(Cli {
            config,
            data_file,
            command,
        })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.data_file)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Read commands from the prompt until `bye`
    Repl(CmdRepl),

    /// Run the given command lines and exit
    Run(CmdRun),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub fn run(
        self,
        config: Option<PathBuf>,
        data_file: Option<PathBuf>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Repl(a) => Self::run_with(config, data_file, |x| a.run(x)),
            Run(a) => Self::run_with(config, data_file, |x| a.run(x)),
            GenerateCompletion(a) => a.run(),
        }
    }

    fn run_with<F>(
        config: Option<PathBuf>,
        data_file: Option<PathBuf>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut Session) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let mut core_config = parse_config(config)?;
        if let Some(path) = data_file {
            core_config.data_path = Some(path);
        }

        let mut session = Session::open(core_config)?;
        f(&mut session)
    }
}
