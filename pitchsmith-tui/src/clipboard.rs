//! Clipboard support via the OSC 52 escape sequence.
//!
//! OSC 52 asks the terminal emulator itself to set the clipboard, so it
//! works over SSH and needs no display-server integration. Terminals that
//! ignore the sequence simply drop it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::{self, Write};

/// Write `payload` to the system clipboard through the hosting terminal.
pub fn copy(payload: &str) -> io::Result<()> {
    let encoded = STANDARD.encode(payload.as_bytes());
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", encoded)?;
    stdout.flush()
}
