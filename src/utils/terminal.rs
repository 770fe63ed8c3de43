//! Putting the terminal back the way the game found it.
//!
//! Restoration runs every step even when an earlier one fails, and a panic
//! hook does the same before the panic message is printed.

use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};

/// Run all results to completion and report the first error.
pub fn first_error<I>(results: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    let mut first = None;
    for result in results {
        if let Err(e) = result {
            log::warn!("Terminal restore step failed: {}", e);
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}

/// Leave raw mode and the alternate screen, and show the cursor again.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    first_error([
        terminal::disable_raw_mode(),
        execute!(out, terminal::LeaveAlternateScreen),
        execute!(out, cursor::Show),
    ])
}

/// Restore the terminal before the default panic output, so the message is
/// readable and the shell is usable afterwards.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(&mut io::stdout());
        default_hook(info);
    }));
}
