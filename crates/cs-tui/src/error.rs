//! TUI-specific error types.

use thiserror::Error;

/// Errors that can occur while running the terminal interface.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// A terminal I/O operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The event channel closed while the interface was still running.
    #[error("event channel closed")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TuiError::ChannelClosed;
        assert_eq!(err.to_string(), "event channel closed");

        let io = std::io::Error::other("boom");
        let err = TuiError::from(io);
        assert!(err.to_string().starts_with("terminal error:"));
    }
}
