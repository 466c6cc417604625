//! User-facing report of a finished fetch run

use std::io::{self, Write};

use todofetch_core::retry::RetryOutcome;

use crate::{
    error::{Error, Result},
    preview::{PREVIEW_LIMIT, write_preview},
    types::Todo,
};

/// Exit status of the command-line run.
///
/// Giving up and being interrupted are reported on stderr but still end the
/// process normally.
pub const EXIT_STATUS: u8 = 0;

/// Write the outcome of a run and return the process exit status.
///
/// - Success: the preview of the first [`PREVIEW_LIMIT`] todos on `out`
/// - Exhausted: `Failed to get todos after several attempts` on `err`
/// - Error: `Fatal error: <cause>` on `err`
pub fn write_report<W, E>(
    out: &mut W,
    err: &mut E,
    result: &Result<RetryOutcome<Vec<Todo>, Error>>,
) -> io::Result<u8>
where
    W: Write,
    E: Write,
{
    match result {
        Ok(RetryOutcome::Succeeded { value: todos, .. }) => {
            write_preview(out, todos, PREVIEW_LIMIT)?;
        }
        Ok(RetryOutcome::Exhausted { .. }) => {
            writeln!(err, "Failed to get todos after several attempts")?;
        }
        Err(cause) => {
            writeln!(err, "Fatal error: {cause}")?;
        }
    }

    out.flush()?;
    err.flush()?;
    Ok(EXIT_STATUS)
}
