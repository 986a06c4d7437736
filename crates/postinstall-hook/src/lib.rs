//! Post-install lifecycle hook.
//!
//! Runs after the package manager has installed the application's files:
//!
//! 1. Rebuilds native dependencies against the installed runtime via
//!    `electron-builder install-app-deps`.
//! 2. On macOS only, installs the `dmg-license` helper used to accept
//!    license prompts when mounting DMG installers.
//!
//! Both steps run synchronously with inherited standard streams. Any
//! failure aborts the hook with exit code 1; there are no retries and no
//! partial-success states.

pub mod error;
pub mod exec;
pub mod hook;
pub mod logging;
pub mod platform;

pub use error::{HookError, Result};
pub use exec::{CommandRunner, SystemRunner};
pub use platform::Os;
