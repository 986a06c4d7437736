//! Error types for the post-install hook.

use thiserror::Error;

/// Errors that can occur while running the hook's external commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HookError {
    /// The command could not be started at all (e.g. not on `PATH`).
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// The program that could not be spawned.
        program: String,
        /// The underlying OS error.
        source: std::io::Error,
    },

    /// The command ran but exited with a non-zero status.
    #[error("`{program}` exited with {}", exit_description(.code))]
    CommandFailed {
        /// The program that failed.
        program: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;
