use crate::error::{Error, OsError, Result};
use crate::raw::RawMode;
use crate::term::{Tty, CSI};
use log::{debug, trace};
use nix::errno::Errno;
use nix::unistd;
use std::str;

/// Device Status Report: asks the terminal to report the cursor position.
/// Four bytes, without a trailing NUL.
const QUERY: &[u8] = b"\x1b[6n";
const TERMINATOR: u8 = b'R';

/// Zero-based cursor column (`x`) and row (`y`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: u16,
    pub y: u16,
}

impl CursorPosition {
    pub fn new(x: u16, y: u16) -> CursorPosition {
        CursorPosition { x, y }
    }

    /// Parses a `ESC [ <row> ; <column> R` reply. Terminals count from one.
    pub fn parse(reply: &[u8]) -> Option<CursorPosition> {
        let body = reply.strip_prefix(CSI.as_bytes())?;
        let body = body.strip_suffix(&[TERMINATOR])?;
        let body = str::from_utf8(body).ok()?;

        let mut fields = body.splitn(2, ';');
        let row = parse_field(fields.next()?)?;
        let column = parse_field(fields.next()?)?;

        Some(CursorPosition::new(
            column.saturating_sub(1),
            row.saturating_sub(1),
        ))
    }

    fn goto_sequence(&self) -> String {
        format!(
            "{}{};{}f",
            CSI,
            u32::from(self.y) + 1,
            u32::from(self.x) + 1
        )
    }
}

fn parse_field(field: &str) -> Option<u16> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl Tty {
    /// Sends the cursor position query and returns the terminal's reply as is,
    /// from the leading escape up to and including the final `R`.
    ///
    /// Blocks until the terminal answers; there is no timeout.
    pub fn read_cursor_position(&self) -> Result<Vec<u8>> {
        let _raw = RawMode::enter(self.input());

        match unistd::isatty(self.input()) {
            Ok(true) => {}
            Ok(false) => return Err(Error::NotATty(OsError::last())),
            Err(e) => return Err(Error::NotATty(e.into())),
        }

        self.write_all(QUERY)?;
        let reply = self.read_reply()?;
        trace!("cursor reply {:?}", String::from_utf8_lossy(&reply));

        Ok(reply)
    }

    fn read_reply(&self) -> Result<Vec<u8>> {
        let mut reply = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            match unistd::read(self.input(), &mut byte) {
                Ok(0) => return Err(Error::OsCall(OsError::from(Errno::EIO))),
                Ok(_) => {
                    reply.push(byte[0]);
                    if byte[0] == TERMINATOR {
                        return Ok(reply);
                    }
                }
                Err(e) if e.as_errno() == Some(Errno::EINTR) => {}
                Err(e) => return Err(Error::OsCall(e.into())),
            }
        }
    }

    /// Cursor position, or the origin if the reply could not be understood.
    pub fn cursor_position(&self) -> Result<CursorPosition> {
        let reply = self.read_cursor_position()?;
        Ok(CursorPosition::parse(&reply).unwrap_or_else(|| {
            debug!("unparseable cursor reply {:?}", reply);
            CursorPosition::default()
        }))
    }

    pub fn set_cursor_position(&self, position: CursorPosition) -> Result<()> {
        // Fails the same way the query does when there is no terminal.
        self.cursor_position()?;
        self.write_all(position.goto_sequence().as_bytes())
    }
}
