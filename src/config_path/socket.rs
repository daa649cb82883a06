use std::path::Path;

#[cfg(unix)]
use nix::sys::stat::{stat, SFlag};
#[cfg(unix)]
use std::os::unix::net::UnixStream;
use tracing::debug;

/// Answers whether a path is a local socket something is listening on.
pub trait SocketChecker {
    fn is_socket(&self, path: &Path) -> bool;
}

/// Checks the file type and then connects to it. The connection is dropped right away.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixSocketChecker;

impl SocketChecker for UnixSocketChecker {
    #[cfg(unix)]
    fn is_socket(&self, path: &Path) -> bool {
        match stat(path) {
            Ok(file_stat) => {
                let file_type = SFlag::from_bits_truncate(file_stat.st_mode) & SFlag::S_IFMT;
                if file_type != SFlag::S_IFSOCK {
                    debug!(path = %path.display(), "not a socket");
                    return false;
                }
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "cannot stat socket");
                return false;
            }
        }

        UnixStream::connect(path)
            .map_err(|err| debug!(path = %path.display(), %err, "cannot connect to socket"))
            .is_ok()
    }

    #[cfg(not(unix))]
    fn is_socket(&self, path: &Path) -> bool {
        debug!(path = %path.display(), "unix sockets are not supported on this platform");
        false
    }
}
