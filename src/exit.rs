// src/exit.rs
//! Standardized process exit codes for `wikinet`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::WikinetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WikinetExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO).
    Error = 1,
    /// Input validation failed (malformed link list, bad config).
    InvalidInput = 2,
    /// The requested article is not in the network.
    NotFound = 3,
}

impl WikinetExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed command.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<WikinetError>() {
            Some(WikinetError::NotFound { .. }) => Self::NotFound,
            Some(
                WikinetError::MalformedLink { .. }
                | WikinetError::Config { .. }
                | WikinetError::InvalidSetting { .. },
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for WikinetExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
