//! Cursor position queries and terminal size control for unix terminals.
//!
//! The free functions act on the process's standard input and output. Use
//! [`Tty`] to aim the same operations at other descriptors.
//!
//! Both operations touch process-wide terminal state and do no locking;
//! callers must not run them concurrently on the same terminal.

mod cursor;
mod error;
mod raw;
mod term;

pub use cursor::CursorPosition;
pub use error::{Error, OsError, Result};
pub use raw::RawMode;
pub use term::{Tty, WindowSize};

/// Status message reported by [`status_message`] for a successful call.
pub const SUCCESS: &str = "none";

/// Raw reply to the cursor position query, e.g. `ESC [ 12 ; 34 R`.
pub fn read_cursor_position() -> Result<Vec<u8>> {
    Tty::stdio().read_cursor_position()
}

pub fn set_terminal_size(columns: u16, lines: u16) -> Result<()> {
    Tty::stdio().set_window_size(WindowSize::new(columns, lines))
}

pub fn terminal_size() -> Result<WindowSize> {
    Tty::stdio().window_size()
}

pub fn cursor_position() -> Result<CursorPosition> {
    Tty::stdio().cursor_position()
}

pub fn set_cursor_position(x: u16, y: u16) -> Result<()> {
    Tty::stdio().set_cursor_position(CursorPosition::new(x, y))
}

/// `"none"` on success, otherwise the `[Errno <n>] <message>` string.
pub fn status_message(result: &Result<()>) -> String {
    match result {
        Ok(()) => SUCCESS.to_string(),
        Err(e) => e.to_string(),
    }
}
