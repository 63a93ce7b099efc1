/*
 * Namespace Errors
 *
 * Every namespace operation is total: a violated precondition comes back as
 * one of these kinds, never as a panic. None of them is retried internally.
 * Turning a kind into something the user reads is the shell's job.
 */

/// Why a namespace operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// Name is empty or longer than `MAX_NAME_LEN`
    InvalidName,
    /// A file or directory with this name already exists
    AlreadyExists,
    /// No entry with this name
    NotFound,
    /// Entry exists but is a directory where a file was expected, or the reverse
    WrongType,
    /// Every slot of the entry table is in use
    TableFull,
}

impl core::fmt::Display for FsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FsError::InvalidName => write!(f, "invalid name"),
            FsError::AlreadyExists => write!(f, "name already exists"),
            FsError::NotFound => write!(f, "not found"),
            FsError::WrongType => write!(f, "wrong entry type"),
            FsError::TableFull => write!(f, "no free entries"),
        }
    }
}

/// Result type for namespace operations.
pub type FsResult<T> = Result<T, FsError>;
