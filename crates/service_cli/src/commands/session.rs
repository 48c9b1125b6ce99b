//! Interactive session command
//!
//! Reads `field=value` edits line by line and reprints the plan after each
//! one. The plan is never edited directly; every change goes through the
//! input record and a full recomputation.

use std::io::{self, BufRead, Write};

use sizing_core::session::Session;
use sizing_core::types::InputField;
use tracing::{debug, warn};

use crate::config::CliConfig;
use crate::output::write_table;
use crate::Result;

/// Run an interactive session on stdin/stdout
pub fn run(config: &CliConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::with_input(config.base_input());
    run_session(session, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Drive a session from `reader` until `quit` or end of input
///
/// Returns the session as it stood when input ended.
pub fn run_session<R: BufRead, W: Write>(
    mut session: Session,
    reader: R,
    out: &mut W,
) -> Result<Session> {
    write_help(out)?;
    writeln!(out)?;
    write_table(out, session.input(), session.plan())?;

    for line in reader.lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                write_help(out)?;
                continue;
            }
            "show" => {}
            "reset" => {
                session.reset();
                debug!("Session reset to defaults");
            }
            edit => match session.apply(edit) {
                Ok(_) => debug!(edit, "Applied edit"),
                Err(e) => {
                    warn!(error = %e, "Rejected edit");
                    writeln!(out, "error: {}", e)?;
                    continue;
                }
            },
        }
        writeln!(out)?;
        write_table(out, session.input(), session.plan())?;
    }

    Ok(session)
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    let fields: Vec<&str> = InputField::ALL.iter().map(|f| f.name()).collect();
    writeln!(out, "Edit with field=value. Fields: {}", fields.join(", "))?;
    writeln!(out, "Commands: show, reset, help, quit")?;
    Ok(())
}
