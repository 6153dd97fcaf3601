//! Bounded retry for reads that race a concurrent writer.

use std::{fs, io, path::Path, thread, time::Duration};

use tracing::debug;

use super::{LogDirError, Result};

/// How hard to try before giving up on a file.
///
/// Only open/read failures are retried. Whatever the caller does with the
/// bytes afterwards (parsing, mostly) is outside the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,

    /// Pause between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_millis(3),
        }
    }
}

impl RetryPolicy {
    /// Read a whole file, retrying while it's unavailable.
    pub fn read_all(&self, path: &Path) -> Result<Vec<u8>> {
        self.run(path, |p| fs::read(p))
    }

    /// Run `op` against `path` until it succeeds or attempts run out.
    ///
    /// Fails with [`LogDirError::ExhaustedRetries`] carrying the last error.
    pub fn run<T>(&self, path: &Path, mut op: impl FnMut(&Path) -> io::Result<T>) -> Result<T> {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match op(path) {
                Ok(value) => return Ok(value),
                Err(e) if attempt < attempts => {
                    debug!(path = %path.display(), attempt, error = %e, "read failed, retrying");
                    thread::sleep(self.delay);
                    attempt += 1;
                }
                Err(source) => {
                    return Err(LogDirError::ExhaustedRetries {
                        path: path.to_path_buf(),
                        attempts,
                        source,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use tempfile::TempDir;

    fn quick(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    /// An operation that fails `failures` times, then yields `bytes`.
    fn flaky<'a>(
        failures: u32,
        bytes: &'static [u8],
        calls: &'a mut u32,
    ) -> impl FnMut(&Path) -> io::Result<Vec<u8>> + 'a {
        move |_: &Path| {
            *calls += 1;
            if *calls <= failures {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"))
            } else {
                Ok(bytes.to_vec())
            }
        }
    }

    #[test]
    fn succeeds_on_the_last_allowed_attempt() {
        let mut calls = 0;
        let bytes = quick(5)
            .run(Path::new("Status.json"), flaky(4, b"{}", &mut calls))
            .unwrap();

        assert_eq!(bytes, b"{}");
        assert_eq!(calls, 5);
    }

    #[test]
    fn stops_at_first_success() {
        let mut calls = 0;
        quick(5)
            .run(Path::new("Status.json"), flaky(1, b"{}", &mut calls))
            .unwrap();

        assert_eq!(calls, 2);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut calls = 0;
        let err = quick(5)
            .run(Path::new("Status.json"), flaky(u32::MAX, b"", &mut calls))
            .unwrap_err();

        assert_eq!(calls, 5);
        assert!(matches!(
            err,
            LogDirError::ExhaustedRetries { attempts: 5, ref path, .. } if path == &PathBuf::from("Status.json")
        ));
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let mut calls = 0;
        let err = quick(0)
            .run(Path::new("x"), flaky(u32::MAX, b"", &mut calls))
            .unwrap_err();

        assert_eq!(calls, 1);
        assert!(matches!(err, LogDirError::ExhaustedRetries { attempts: 1, .. }));
    }

    #[test]
    fn read_all_returns_file_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Status.json");
        fs::write(&path, "hello").unwrap();

        assert_eq!(quick(3).read_all(&path).unwrap(), b"hello");
    }

    #[test]
    fn read_all_missing_file_exhausts_retries() {
        let dir = TempDir::new().unwrap();
        let err = quick(3).read_all(&dir.path().join("Status.json")).unwrap_err();

        assert!(matches!(err, LogDirError::ExhaustedRetries { attempts: 3, .. }));
    }
}
