// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};

use clap::{ArgMatches, Command, arg};
use quill_core::Session;

use crate::reply_formatter::ReplyFormatter;

#[derive(Debug, Clone)]
pub struct CmdRun {
    pub lines: Vec<String>,
}

impl CmdRun {
    pub const NAME: &str = "run";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Run the given command lines in order, then exit")
            .arg(
                arg!(lines: <LINE>... "Command lines, e.g. \"todo read book\"")
                    .allow_hyphen_values(true),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let lines = matches
            .get_many::<String>("lines")
            .map(|lines| lines.cloned().collect())
            .unwrap_or_default();
        Self { lines }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(count = self.lines.len(), "running command lines...");
        self.run_on(session, &mut io::stdout().lock())?;
        Ok(())
    }

    /// Handles each line in order, stopping early at `bye`.
    fn run_on(self, session: &mut Session, out: &mut impl Write) -> io::Result<()> {
        let formatter = ReplyFormatter::new();
        for line in &self.lines {
            let outcome = session.handle(line);
            formatter.write(out, &outcome)?;
            if outcome.is_exit() {
                break;
            }
        }
        Ok(())
    }
}
