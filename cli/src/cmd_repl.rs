// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};

use clap::Command;
use quill_core::Session;

use crate::reply_formatter::{GREETING, ReplyFormatter};

const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy)]
pub struct CmdRepl;

impl CmdRepl {
    pub const NAME: &str = "repl";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Read commands line by line until `bye` (default)")
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(path = %session.storage().path().display(), "starting prompt...");
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        self.serve(session, stdin.lock(), &mut io::stdout().lock(), prompt)?;
        Ok(())
    }

    /// Handles lines from `input` until `bye` or end of input. Blank lines are
    /// ignored.
    fn serve(
        self,
        session: &mut Session,
        input: impl BufRead,
        out: &mut impl Write,
        prompt: bool,
    ) -> io::Result<()> {
        let formatter = ReplyFormatter::new();
        writeln!(out, "{GREETING}")?;

        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                tracing::debug!("end of input");
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let outcome = session.handle(&line);
            formatter.write(out, &outcome)?;
            if outcome.is_exit() {
                break;
            }
        }
        Ok(())
    }
}
