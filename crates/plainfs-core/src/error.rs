//! Error types for plainfs operations

/// Every failure a plainfs operation can report.
///
/// Named variants correspond to one POSIX error code each (see
/// [`FileError::from_raw_os_error`]). `NotUtf8` is raised by the text
/// operations; `Unknown` carries the OS message for any code the table does
/// not name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileError {
    /// EACCES
    #[error("permission denied")]
    AccessDenied,
    /// EAGAIN
    #[error("resource temporarily unavailable")]
    WouldBlock,
    /// EBADF
    #[error("bad file descriptor")]
    BadFileDescriptor,
    /// EBADMSG
    #[error("bad message")]
    BadMessage,
    /// EBUSY
    #[error("resource busy")]
    Busy,
    /// EDEADLK
    #[error("resource deadlock avoided")]
    Deadlock,
    /// EDQUOT
    #[error("disk quota exceeded")]
    QuotaExceeded,
    /// EEXIST
    #[error("file already exists")]
    AlreadyExists,
    /// EFAULT
    #[error("bad address")]
    BadAddress,
    /// EFBIG
    #[error("file too large")]
    FileTooLarge,
    /// EINTR
    #[error("interrupted system call")]
    Interrupted,
    /// EINVAL
    #[error("invalid argument")]
    InvalidArgument,
    /// EIO
    #[error("input/output error")]
    Io,
    /// EISDIR
    #[error("is a directory")]
    IsADirectory,
    /// ELOOP
    #[error("too many levels of symbolic links")]
    TooManySymlinks,
    /// EMFILE
    #[error("too many open files")]
    TooManyOpenFiles,
    /// EMLINK
    #[error("too many links")]
    TooManyLinks,
    /// EMULTIHOP
    #[error("multihop attempted")]
    Multihop,
    /// ENAMETOOLONG
    #[error("file name too long")]
    NameTooLong,
    /// ENFILE
    #[error("too many open files in system")]
    FileTableOverflow,
    /// ENOBUFS
    #[error("no buffer space available")]
    NoBufferSpace,
    /// ENODEV
    #[error("no such device")]
    NoSuchDevice,
    /// ENOLCK
    #[error("no locks available")]
    NoLocksAvailable,
    /// ENOLINK
    #[error("link has been severed")]
    LinkSevered,
    /// ENOENT
    #[error("no such file or directory")]
    NotFound,
    /// ENOMEM
    #[error("out of memory")]
    OutOfMemory,
    /// ENOSPC
    #[error("no space left on device")]
    NoSpace,
    /// ENOSR
    #[error("no stream resources")]
    NoStreamResources,
    /// ENOSTR
    #[error("not a stream")]
    NotAStream,
    /// ENOSYS
    #[error("function not implemented")]
    NotImplemented,
    /// ENXIO
    #[error("no such device or address")]
    NoSuchDeviceOrAddress,
    /// EOPNOTSUPP
    #[error("operation not supported")]
    NotSupported,
    /// EOVERFLOW
    #[error("value too large for defined data type")]
    Overflow,
    /// EPERM
    #[error("operation not permitted")]
    PermissionDenied,
    /// EPIPE
    #[error("broken pipe")]
    BrokenPipe,
    /// ERANGE
    #[error("result out of range")]
    OutOfRange,
    /// EROFS
    #[error("read-only file system")]
    ReadOnlyFilesystem,
    /// ESPIPE
    #[error("illegal seek")]
    IllegalSeek,
    /// ESRCH
    #[error("no such process")]
    NoSuchProcess,
    /// ESTALE
    #[error("stale file handle")]
    StaleHandle,
    /// ETXTBSY
    #[error("text file busy")]
    TextFileBusy,
    /// EXDEV
    #[error("cross-device link")]
    CrossDevice,
    /// Contents, an entry name, or the working directory are not valid UTF-8.
    #[error("not valid UTF-8")]
    NotUtf8,
    #[error("unknown error: {0}")]
    Unknown(String),
}

pub type FileResult<T> = Result<T, FileError>;

impl FileError {
    /// Build an `Unknown` error from any message.
    pub fn unknown<S: Into<String>>(message: S) -> Self {
        Self::Unknown(message.into())
    }

    /// True for the "path does not exist" class of failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
