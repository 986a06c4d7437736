//! The installer hook itself.
//!
//! Two sequential steps: rebuild native dependencies, then (macOS only)
//! install the DMG license helper. The first failure aborts the hook.

use crate::error::Result;
use crate::exec::CommandRunner;
use crate::platform::Os;

/// Tool that rebuilds native add-ons against the installed app runtime.
const DEPS_PROGRAM: &str = "electron-builder";
const DEPS_ARGS: &[&str] = &["install-app-deps"];

/// Helper package for accepting DMG license prompts, needed on macOS only.
const DMG_LICENSE_PROGRAM: &str = "npm";
const DMG_LICENSE_ARGS: &[&str] = &["install", "dmg-license"];

/// Run the post-install steps for the given operating system.
///
/// Order is fixed: the dependency rebuild always runs first, and the
/// license-helper install is never attempted if it fails.
///
/// # Errors
///
/// Propagates the first failing invocation unchanged; there is no retry and
/// no distinction between the two steps' failure causes.
pub fn run(runner: &dyn CommandRunner, os: Os) -> Result<()> {
    tracing::info!("Rebuilding native dependencies");
    runner.run(DEPS_PROGRAM, DEPS_ARGS)?;

    if os == Os::MacOs {
        tracing::info!("Installing DMG license helper");
        runner.run(DMG_LICENSE_PROGRAM, DMG_LICENSE_ARGS)?;
    } else {
        tracing::debug!("Skipping DMG license helper on {}", os.display_name());
    }

    Ok(())
}
