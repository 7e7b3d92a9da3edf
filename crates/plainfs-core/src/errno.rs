//! Classification of raw OS error codes into [`FileError`].
//!
//! The mapping lives in one immutable table. Forward lookup (code to variant)
//! and reverse lookup (variant to code) both read it, so the two directions
//! cannot disagree.

use std::io;

#[cfg(unix)]
use nix::errno::Errno;

use crate::error::FileError;

#[cfg(unix)]
static ERRNO_TABLE: &[(Errno, FileError)] = &[
    (Errno::EACCES, FileError::AccessDenied),
    (Errno::EAGAIN, FileError::WouldBlock),
    (Errno::EBADF, FileError::BadFileDescriptor),
    (Errno::EBADMSG, FileError::BadMessage),
    (Errno::EBUSY, FileError::Busy),
    // EDEADLOCK is an alias of EDEADLK wherever both exist
    (Errno::EDEADLK, FileError::Deadlock),
    (Errno::EDQUOT, FileError::QuotaExceeded),
    (Errno::EEXIST, FileError::AlreadyExists),
    (Errno::EFAULT, FileError::BadAddress),
    (Errno::EFBIG, FileError::FileTooLarge),
    (Errno::EINTR, FileError::Interrupted),
    (Errno::EINVAL, FileError::InvalidArgument),
    (Errno::EIO, FileError::Io),
    (Errno::EISDIR, FileError::IsADirectory),
    (Errno::ELOOP, FileError::TooManySymlinks),
    (Errno::EMFILE, FileError::TooManyOpenFiles),
    (Errno::EMLINK, FileError::TooManyLinks),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (Errno::EMULTIHOP, FileError::Multihop),
    (Errno::ENAMETOOLONG, FileError::NameTooLong),
    (Errno::ENFILE, FileError::FileTableOverflow),
    (Errno::ENOBUFS, FileError::NoBufferSpace),
    (Errno::ENODEV, FileError::NoSuchDevice),
    (Errno::ENOLCK, FileError::NoLocksAvailable),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (Errno::ENOLINK, FileError::LinkSevered),
    (Errno::ENOENT, FileError::NotFound),
    (Errno::ENOMEM, FileError::OutOfMemory),
    (Errno::ENOSPC, FileError::NoSpace),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (Errno::ENOSR, FileError::NoStreamResources),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (Errno::ENOSTR, FileError::NotAStream),
    (Errno::ENOSYS, FileError::NotImplemented),
    (Errno::ENXIO, FileError::NoSuchDeviceOrAddress),
    (Errno::EOPNOTSUPP, FileError::NotSupported),
    (Errno::EOVERFLOW, FileError::Overflow),
    (Errno::EPERM, FileError::PermissionDenied),
    (Errno::EPIPE, FileError::BrokenPipe),
    (Errno::ERANGE, FileError::OutOfRange),
    (Errno::EROFS, FileError::ReadOnlyFilesystem),
    (Errno::ESPIPE, FileError::IllegalSeek),
    (Errno::ESRCH, FileError::NoSuchProcess),
    (Errno::ESTALE, FileError::StaleHandle),
    (Errno::ETXTBSY, FileError::TextFileBusy),
    (Errno::EXDEV, FileError::CrossDevice),
];

impl FileError {
    /// Classify a raw OS error code.
    ///
    /// Total and pure: codes without a table entry become `Unknown` carrying
    /// the OS description of the code.
    pub fn from_raw_os_error(code: i32) -> Self {
        #[cfg(unix)]
        {
            let errno = Errno::from_raw(code);
            if let Some((_, variant)) = ERRNO_TABLE.iter().find(|(e, _)| *e == errno) {
                return variant.clone();
            }
        }
        Self::Unknown(io::Error::from_raw_os_error(code).to_string())
    }

    /// The OS code this variant was classified from, if it has one on this
    /// platform.
    pub fn raw_os_error(&self) -> Option<i32> {
        #[cfg(unix)]
        {
            ERRNO_TABLE
                .iter()
                .find(|(_, variant)| variant == self)
                .map(|(errno, _)| *errno as i32)
        }
        #[cfg(not(unix))]
        {
            None
        }
    }
}

impl From<io::Error> for FileError {
    fn from(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(code) => Self::from_raw_os_error(code),
            None => Self::Unknown(err.to_string()),
        }
    }
}
