//! The single place where native failures become [`FileError`] values.

use tracing::debug;

use crate::error::{FileError, FileResult};

/// Run one filesystem action and classify its failure.
///
/// `action` is invoked exactly once. Any error it returns is converted into a
/// [`FileError`] (an `std::io::Error` goes through the errno table) and logged
/// at debug level together with `op` and `path`.
pub fn attempt<T, E, F>(op: &'static str, path: &str, action: F) -> FileResult<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<FileError>,
{
    action().map_err(|err| {
        let err: FileError = err.into();
        debug!(op, path, error = %err, "filesystem operation failed");
        err
    })
}
