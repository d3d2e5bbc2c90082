use crate::error::{Error, OsError, Result};
use log::debug;
use nix::errno::Errno;
use nix::unistd;
use std::os::unix::io::RawFd;

pub(crate) const CSI: &str = "\x1b[";

nix::ioctl_read_bad!(tiocgwinsz, libc::TIOCGWINSZ, libc::winsize);
nix::ioctl_write_ptr_bad!(tiocswinsz, libc::TIOCSWINSZ, libc::winsize);

/// Terminal geometry in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub columns: u16,
    pub lines: u16,
}

impl WindowSize {
    pub fn new(columns: u16, lines: u16) -> WindowSize {
        WindowSize { columns, lines }
    }
}

impl From<WindowSize> for libc::winsize {
    fn from(size: WindowSize) -> libc::winsize {
        libc::winsize {
            ws_row: size.lines,
            ws_col: size.columns,
            ws_xpixel: 0,
            ws_ypixel: 0,
        }
    }
}

impl From<libc::winsize> for WindowSize {
    fn from(size: libc::winsize) -> WindowSize {
        WindowSize::new(size.ws_col, size.ws_row)
    }
}

/// The descriptors a terminal is read from and written to.
///
/// Nothing is owned: the descriptors are never closed by a `Tty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tty {
    input: RawFd,
    output: RawFd,
}

impl Tty {
    pub fn new(input: RawFd, output: RawFd) -> Tty {
        Tty { input, output }
    }

    pub fn stdio() -> Tty {
        Tty::new(libc::STDIN_FILENO, libc::STDOUT_FILENO)
    }

    pub fn input(&self) -> RawFd {
        self.input
    }

    pub fn output(&self) -> RawFd {
        self.output
    }

    pub fn window_size(&self) -> Result<WindowSize> {
        let mut size = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        unsafe { tiocgwinsz(self.output, &mut size) }.map_err(|e| Error::OsCall(e.into()))?;

        Ok(size.into())
    }

    /// Asks the kernel to report `size` for the terminal behind the output
    /// descriptor. Pixel dimensions are always zero.
    pub fn set_window_size(&self, size: WindowSize) -> Result<()> {
        let raw = libc::winsize::from(size);
        debug!(
            "TIOCSWINSZ fd {}: {} columns, {} lines",
            self.output, size.columns, size.lines
        );
        unsafe { tiocswinsz(self.output, &raw) }.map_err(|e| Error::OsCall(e.into()))?;

        Ok(())
    }

    pub(crate) fn write_all(&self, mut buf: &[u8]) -> Result<()> {
        while !buf.is_empty() {
            match unistd::write(self.output, buf) {
                Ok(0) => return Err(Error::OsCall(OsError::from(Errno::EIO))),
                Ok(n) => buf = &buf[n..],
                Err(e) if e.as_errno() == Some(Errno::EINTR) => {}
                Err(e) => return Err(Error::OsCall(e.into())),
            }
        }
        Ok(())
    }
}
