use thiserror::Error;

/// Errors produced while resolving platform paths.
///
/// Errors crossing the method-channel boundary are reduced to a stable
/// `{code, message}` pair; [`BridgeError::code`] supplies the code and the
/// `Display` implementation supplies the message, unmodified.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The underlying OS call failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The host environment exposes no home directory to anchor per-user
    /// locations on.
    #[error("no home directory available for the current user")]
    MissingHomeDirectory,

    /// The dedicated background worker has been shut down; the request can
    /// no longer be executed or its result can no longer be delivered.
    #[error("background resolver worker is no longer running")]
    WorkerUnavailable,
}

impl BridgeError {
    /// Stable identifier for the error variant, used as the error code at
    /// the method-channel boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "Io",
            Self::MissingHomeDirectory => "MissingHomeDirectory",
            Self::WorkerUnavailable => "WorkerUnavailable",
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_keeps_os_message() {
        let err = BridgeError::from(io::Error::new(io::ErrorKind::PermissionDenied, "read-only mount"));
        assert_eq!(err.code(), "Io");
        assert_eq!(err.to_string(), "read-only mount");
    }

    #[test]
    fn codes_are_variant_names() {
        assert_eq!(BridgeError::MissingHomeDirectory.code(), "MissingHomeDirectory");
        assert_eq!(BridgeError::WorkerUnavailable.code(), "WorkerUnavailable");
    }
}
