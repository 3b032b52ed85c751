//! In-memory `PackageOperations` fake shared by the worker and queue tests.

use crate::backends::command_exec::CommandOutput;
use crate::core::types::ActionKind;
use crate::error::{PkgdeckError, Result};
use crate::queue::listener::WorkerEvent;
use crate::traits::PackageOperations;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::{Condvar, Mutex};
use std::time::Duration;

pub(crate) const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Default)]
pub(crate) struct FakeOps {
    fail_on: HashSet<String>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    blocked: Mutex<HashSet<String>>,
    released: Condvar,
    started: Mutex<Vec<String>>,
    started_cv: Condvar,
}

impl FakeOps {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Operations on `identifier` return `OperationFailed`.
    pub(crate) fn failing(mut self, identifier: &str) -> Self {
        self.fail_on.insert(identifier.to_string());
        self
    }

    /// Operations on `identifier` block until [`FakeOps::release`] is called.
    pub(crate) fn blocking(self, identifier: &str) -> Self {
        self.blocked
            .lock()
            .expect("blocked lock")
            .insert(identifier.to_string());
        self
    }

    pub(crate) fn release(&self, identifier: &str) {
        self.blocked.lock().expect("blocked lock").remove(identifier);
        self.released.notify_all();
    }

    /// Wait until an operation on `identifier` has started.
    pub(crate) fn wait_started(&self, identifier: &str) -> bool {
        let started = self.started.lock().expect("started lock");
        let (started, timeout) = self
            .started_cv
            .wait_timeout_while(started, TIMEOUT, |s| !s.iter().any(|id| id == identifier))
            .expect("started wait");
        drop(started);
        !timeout.timed_out()
    }

    /// `"install:<id>"` / `"uninstall:<id>"` in call order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn perform(&self, action: ActionKind, identifier: &str) -> Result<CommandOutput> {
        let verb = match action {
            ActionKind::Install => "install",
            ActionKind::Uninstall => "uninstall",
        };
        self.calls
            .lock()
            .expect("calls lock")
            .push(format!("{}:{}", verb, identifier));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        self.started
            .lock()
            .expect("started lock")
            .push(identifier.to_string());
        self.started_cv.notify_all();

        let blocked = self.blocked.lock().expect("blocked lock");
        let blocked = self
            .released
            .wait_while(blocked, |b| b.contains(identifier))
            .expect("release wait");
        drop(blocked);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_on.contains(identifier) {
            return Err(PkgdeckError::operation_failed(identifier, "boom"));
        }

        Ok(CommandOutput {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 0,
        })
    }
}

impl PackageOperations for FakeOps {
    fn install_or_upgrade(&self, identifier: &str) -> Result<CommandOutput> {
        self.perform(ActionKind::Install, identifier)
    }

    fn uninstall(&self, identifier: &str) -> Result<CommandOutput> {
        self.perform(ActionKind::Uninstall, identifier)
    }
}

/// Collect events until `terminals` terminal summaries have been received.
pub(crate) fn collect_until_finished(rx: &Receiver<WorkerEvent>, terminals: usize) -> Vec<WorkerEvent> {
    let mut events = Vec::new();
    let mut seen = 0;

    while seen < terminals {
        let event = rx.recv_timeout(TIMEOUT).expect("worker event");
        if event.is_terminal() {
            seen += 1;
        }
        events.push(event);
    }

    events
}

/// `(message, percent)` pairs of the progress events, terminal events dropped.
pub(crate) fn progress_pairs(events: &[WorkerEvent]) -> Vec<(String, u8)> {
    events
        .iter()
        .filter_map(|e| match e {
            WorkerEvent::Progress(p) => Some((p.message.clone(), p.percent)),
            WorkerEvent::Finished(_) => None,
        })
        .collect()
}
