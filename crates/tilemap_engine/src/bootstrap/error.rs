//! Bootstrap errors

use thiserror::Error;

/// Fatal initialization failures
///
/// None of these are retried; the process reports the error and exits with
/// [`BootstrapError::exit_code`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// The windowing subsystem could not be initialized
    #[error("Failed to initialize windowing subsystem: {0}")]
    PlatformInit(String),

    /// The window or its graphics context could not be created
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// Graphics entry points could not be resolved
    #[error("Failed to load graphics functions: {0}")]
    GraphicsLoader(String),
}

impl BootstrapError {
    /// Process exit status reported for this error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::PlatformInit(_) => 1,
            Self::WindowCreation(_) => 2,
            Self::GraphicsLoader(_) => 3,
        }
    }
}

/// Result alias for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Process exit status for a bootstrap outcome
///
/// `0` only for a graceful close.
pub const fn exit_status(result: &BootstrapResult<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(error) => error.exit_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let errors = [
            BootstrapError::PlatformInit("no display".into()),
            BootstrapError::WindowCreation("800x600".into()),
            BootstrapError::GraphicsLoader("glClear".into()),
        ];
        let codes: Vec<u8> = errors.iter().map(BootstrapError::exit_code).collect();
        assert_eq!(codes, vec![1, 2, 3]);
        assert_eq!(exit_status(&Ok(())), 0);
        assert_eq!(exit_status(&Err(errors[1].clone())), 2);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            BootstrapError::GraphicsLoader("unresolved entry points: glClear".into()).to_string(),
            "Failed to load graphics functions: unresolved entry points: glClear"
        );
    }
}
