//! Single in-flight run guard.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::error::RenameError;

/// Run controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No run in flight; a new one may start.
    #[default]
    Idle,
    /// A run is in flight; new runs are rejected.
    Running,
}

/// Two-state job controller: `Idle` <-> `Running`.
#[derive(Debug, Default)]
pub struct RunController {
    state: Mutex<RunState>,
}

impl RunController {
    /// New controller in `Idle`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> RunState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move to `Running`, or fail if already there.
    ///
    /// The returned guard moves the controller back to `Idle` when dropped.
    ///
    /// # Errors
    /// `RenameError::AlreadyRunning` while another guard is alive.
    pub fn try_begin(&self) -> Result<RunGuard<'_>, RenameError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == RunState::Running {
            return Err(RenameError::AlreadyRunning);
        }
        *state = RunState::Running;
        Ok(RunGuard { controller: self })
    }
}

/// Holds a [`RunController`] in `Running`.
#[derive(Debug)]
pub struct RunGuard<'a> {
    controller: &'a RunController,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        *self
            .controller
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = RunState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_second_run() {
        let controller = RunController::new();
        let guard = controller.try_begin().expect("first run");
        assert_eq!(controller.state(), RunState::Running);
        assert!(matches!(
            controller.try_begin(),
            Err(RenameError::AlreadyRunning)
        ));
        drop(guard);
        assert_eq!(controller.state(), RunState::Idle);
        assert!(controller.try_begin().is_ok());
    }

    #[test]
    fn test_rejects_across_threads() {
        let controller = RunController::new();
        let _guard = controller.try_begin().expect("first run");
        std::thread::scope(|scope| {
            let handle = scope.spawn(|| controller.try_begin().is_err());
            assert!(handle.join().expect("thread"));
        });
    }

    #[test]
    fn test_idle_after_panic() {
        let controller = RunController::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = controller.try_begin().expect("first run");
            panic!("run failed");
        }));
        assert!(result.is_err());
        assert_eq!(controller.state(), RunState::Idle);
    }
}
