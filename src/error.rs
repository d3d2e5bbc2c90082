use nix::errno::Errno;
use std::ffi::CStr;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Standard input is not an interactive terminal.
    #[error("{0}")]
    NotATty(OsError),
    /// A terminal call (ioctl, read, write) failed.
    #[error("{0}")]
    OsCall(OsError),
}

impl Error {
    pub fn errno(&self) -> Errno {
        match self {
            Error::NotATty(e) | Error::OsCall(e) => e.errno(),
        }
    }
}

/// An errno value, displayed the way Python's `OSError` displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsError(Errno);

impl OsError {
    pub fn last() -> OsError {
        OsError(Errno::last())
    }

    pub fn errno(&self) -> Errno {
        self.0
    }
}

impl From<Errno> for OsError {
    fn from(errno: Errno) -> OsError {
        OsError(errno)
    }
}

impl From<nix::Error> for OsError {
    fn from(err: nix::Error) -> OsError {
        OsError(err.as_errno().unwrap_or_else(Errno::last))
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[Errno {}] {}", self.0 as i32, strerror(self.0 as i32))
    }
}

/// The C library's message for `errno`, as `strerror(3)` prints it.
fn strerror(errno: i32) -> String {
    let mut buf = [0 as libc::c_char; 256];
    let rc = unsafe { libc::strerror_r(errno, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        return format!("Unknown error {}", errno);
    }
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}
