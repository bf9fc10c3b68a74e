use std::fmt;

/// Result type for turndown-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rejections the shift controller can return.
///
/// Everything except `Storage` is an expected, normal rejection the
/// presentation layer should surface as guidance. `Storage` is fatal
/// within a session and never retried.
#[derive(Debug)]
pub enum Error {
    /// Caller lacks the role the operation requires (or is not logged in)
    PermissionDenied(String),

    /// The daily quota for this session kind is exhausted
    QuotaExceeded { limit: u32 },

    /// Room id does not resolve to a catalog room
    RoomNotFound(String),

    /// Task id does not resolve to a catalog task
    TaskNotFound(String),

    /// A session of this kind is already in progress for the room
    Conflict(String),

    /// Lifecycle precondition violated (no active session, not cleaned today)
    InvalidState(String),

    /// Malformed input (e.g., empty spot check notes)
    Validation(String),

    /// Configuration error
    Config(String),

    /// Underlying persistence fault
    Storage(turndown_store::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Error::QuotaExceeded { limit } => {
                write!(f, "Daily limit of {} reached", limit)
            }
            Error::RoomNotFound(id) => write!(f, "Room '{}' not found", id),
            Error::TaskNotFound(id) => write!(f, "Task '{}' not found", id),
            Error::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<turndown_store::Error> for Error {
    fn from(err: turndown_store::Error) -> Self {
        Error::Storage(err)
    }
}
