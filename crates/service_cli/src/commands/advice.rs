//! Advice command implementation

use std::io::{self, Write};

use crate::output::write_advice;
use crate::Result;

/// Print the best-practice list
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_advice(&mut out)?;
    out.flush()?;
    Ok(())
}
