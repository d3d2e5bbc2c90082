use log::{debug, trace};
use nix::sys::termios::{cfmakeraw, tcgetattr, tcsetattr, SetArg, Termios};
use std::os::unix::io::RawFd;

/// Puts a terminal into raw mode until dropped.
///
/// Failing to read or change the attributes is not an error: a descriptor that
/// is not a terminal simply has nothing to save or restore.
pub struct RawMode {
    fd: RawFd,
    saved: Option<Termios>,
}

impl RawMode {
    pub fn enter(fd: RawFd) -> RawMode {
        let saved = match tcgetattr(fd) {
            Ok(saved) => {
                let mut raw = saved.clone();
                cfmakeraw(&mut raw);
                match tcsetattr(fd, SetArg::TCSANOW, &raw) {
                    Ok(()) => trace!("fd {} in raw mode", fd),
                    Err(e) => debug!("raw mode on fd {}: {}", fd, e),
                }
                Some(saved)
            }
            Err(e) => {
                debug!("no terminal attributes on fd {}: {}", fd, e);
                None
            }
        };

        RawMode { fd, saved }
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if let Err(e) = tcsetattr(self.fd, SetArg::TCSANOW, &saved) {
                debug!("restoring fd {}: {}", self.fd, e);
            } else {
                trace!("fd {} restored", self.fd);
            }
        }
    }
}
