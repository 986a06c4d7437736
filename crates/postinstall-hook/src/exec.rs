//! Synchronous external command invocation.
//!
//! The hook's only side effects happen through the external tools it runs.
//! `CommandRunner` is the seam that lets tests observe invocation order and
//! outcomes without spawning real processes; `SystemRunner` is the
//! production implementation.

use crate::error::{HookError, Result};
use std::process::Command;

/// Runs an external command to completion with inherited standard streams.
pub trait CommandRunner {
    /// Invoke `program` with `args`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Spawn`] if the command could not be started and
    /// [`HookError::CommandFailed`] if it exited non-zero.
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;
}

/// Production runner backed by [`std::process::Command`].
///
/// Standard input/output/error are inherited from the parent, so the child's
/// own output is visible to whatever invoked the hook.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        tracing::debug!("Running `{}` with args {:?}", program, args);

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| HookError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(HookError::CommandFailed {
                program: program.to_string(),
                code: status.code(),
            })
        }
    }
}
