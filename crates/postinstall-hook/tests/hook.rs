//! Integration tests for the installer hook.
//!
//! Drives `hook::run` with a scripted runner so invocation counts, ordering,
//! and short-circuit behavior can be asserted without real subprocesses.

use postinstall_hook::{CommandRunner, HookError, Os, Result, hook};
use std::cell::RefCell;

/// One recorded invocation: program name plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    program: String,
    args: Vec<String>,
}

/// Scripted runner: records every invocation and fails the nth one.
struct ScriptedRunner {
    invocations: RefCell<Vec<Invocation>>,
    fail_at: Option<usize>,
}

impl ScriptedRunner {
    fn succeeding() -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            fail_at: None,
        }
    }

    fn failing_at(index: usize) -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            fail_at: Some(index),
        }
    }

    fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let index = self.invocations.borrow().len();
        self.invocations.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|&a| a.to_string()).collect(),
        });
        if self.fail_at == Some(index) {
            Err(HookError::CommandFailed {
                program: program.to_string(),
                code: Some(127),
            })
        } else {
            Ok(())
        }
    }
}

fn rebuild_invocation() -> Invocation {
    Invocation {
        program: "electron-builder".to_string(),
        args: vec!["install-app-deps".to_string()],
    }
}

fn license_helper_invocation() -> Invocation {
    Invocation {
        program: "npm".to_string(),
        args: vec!["install".to_string(), "dmg-license".to_string()],
    }
}

#[test]
fn test_macos_success_runs_exactly_two_invocations() {
    let runner = ScriptedRunner::succeeding();

    hook::run(&runner, Os::MacOs).unwrap();

    assert_eq!(
        runner.invocations(),
        vec![rebuild_invocation(), license_helper_invocation()]
    );
}

#[test]
fn test_other_platforms_run_exactly_one_invocation() {
    for os in [Os::Windows, Os::Linux] {
        let runner = ScriptedRunner::succeeding();

        hook::run(&runner, os).unwrap();

        assert_eq!(runner.invocations(), vec![rebuild_invocation()]);
    }
}

#[test]
fn test_rebuild_failure_skips_license_helper() {
    let runner = ScriptedRunner::failing_at(0);

    let result = hook::run(&runner, Os::MacOs);

    assert!(result.is_err());
    assert_eq!(runner.invocations(), vec![rebuild_invocation()]);
}

#[test]
fn test_license_helper_failure_reported_after_rebuild() {
    let runner = ScriptedRunner::failing_at(1);

    let result = hook::run(&runner, Os::MacOs);

    assert!(matches!(
        result,
        Err(HookError::CommandFailed { ref program, code: Some(127) }) if program == "npm"
    ));
    assert_eq!(
        runner.invocations(),
        vec![rebuild_invocation(), license_helper_invocation()]
    );
}

#[test]
fn test_rebuild_failure_on_other_platforms() {
    let runner = ScriptedRunner::failing_at(0);

    let result = hook::run(&runner, Os::Linux);

    assert!(result.is_err());
    assert_eq!(runner.invocations().len(), 1);
}

#[test]
fn test_rebuild_always_precedes_license_helper() {
    let runner = ScriptedRunner::succeeding();

    hook::run(&runner, Os::MacOs).unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations[0].program, "electron-builder");
    assert_eq!(invocations[1].program, "npm");
}
