//! # Task queue
//!
//! Ordered list of pending batches plus a single worker slot. At most one batch
//! runs at a time, on one background thread, because the package-manager CLI is
//! not safe to invoke concurrently from the same process.
//!
//! When a batch ends the slot is released, the next pending batch (if any) is
//! claimed, the terminal summary is delivered, and the claimed batch starts on
//! the same thread. Listeners therefore see the terminal event of one batch
//! before any event of the next.

pub mod listener;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use listener::{ChannelListener, ProgressListener, WorkerEvent};
pub use worker::CancellationToken;

use crate::core::types::{Batch, ProgressEvent, Summary, WorkerState};
use crate::traits::PackageOperations;
use crate::ui;
use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, RwLock};
use std::thread;
use std::time::Duration;

struct ActiveWorker {
    token: CancellationToken,
    finished: bool,
}

#[derive(Default)]
struct QueueState {
    pending: VecDeque<Batch>,
    active: Option<ActiveWorker>,
    /// Terminal summaries claimed but not yet delivered to listeners.
    delivering: usize,
}

impl QueueState {
    /// Claim the worker slot for the next pending batch, if the slot is free.
    fn claim_next(&mut self) -> Option<(Batch, CancellationToken)> {
        if self.active.is_some() {
            return None;
        }

        let batch = self.pending.pop_front()?;
        let token = CancellationToken::new();
        self.active = Some(ActiveWorker {
            token: token.clone(),
            finished: false,
        });
        Some((batch, token))
    }

    fn is_drained(&self) -> bool {
        self.active.is_none() && self.pending.is_empty() && self.delivering == 0
    }
}

struct Shared {
    ops: Arc<dyn PackageOperations>,
    state: Mutex<QueueState>,
    drained: Condvar,
    listeners: RwLock<Vec<Arc<dyn ProgressListener>>>,
    /// Serializes listener callbacks across batches.
    emit_lock: Mutex<()>,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, QueueState> {
        // Every critical section leaves the state consistent, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn listeners(&self) -> Vec<Arc<dyn ProgressListener>> {
        self.listeners
            .read()
            .map(|l| l.to_vec())
            .unwrap_or_else(|e| e.into_inner().to_vec())
    }

    fn emit_progress(&self, event: &ProgressEvent) {
        let _guard = self.emit_lock.lock().unwrap_or_else(|e| e.into_inner());
        for listener in self.listeners() {
            listener.on_progress(event);
        }
    }

    fn emit_finished(&self, summary: Summary) {
        let _guard = self.emit_lock.lock().unwrap_or_else(|e| e.into_inner());
        for listener in self.listeners() {
            listener.on_finished(summary);
        }
    }

    fn mark_finished(&self) {
        if let Some(active) = self.state().active.as_mut() {
            active.finished = true;
        }
    }

    /// Release the slot, claim the next batch, then deliver the terminal summary.
    fn finish(&self, summary: Summary) -> Option<(Batch, CancellationToken)> {
        let next = {
            let mut state = self.state();
            state.active = None;
            state.delivering += 1;
            state.claim_next()
        };

        ui::verbose(&format!("Worker finished: {}", summary));
        self.emit_finished(summary);

        let mut state = self.state();
        state.delivering -= 1;
        if state.is_drained() {
            self.drained.notify_all();
        }

        next
    }
}

/// Sequential, cancellable executor for package batches.
#[derive(Clone)]
pub struct TaskQueue {
    shared: Arc<Shared>,
}

impl TaskQueue {
    pub fn new<P>(ops: P) -> Self
    where
        P: PackageOperations + 'static,
    {
        Self::with_shared_ops(Arc::new(ops))
    }

    pub fn with_shared_ops(ops: Arc<dyn PackageOperations>) -> Self {
        Self {
            shared: Arc::new(Shared {
                ops,
                state: Mutex::new(QueueState::default()),
                drained: Condvar::new(),
                listeners: RwLock::new(Vec::new()),
                emit_lock: Mutex::new(()),
            }),
        }
    }

    /// Register a listener for every subsequent event.
    pub fn subscribe(&self, listener: Arc<dyn ProgressListener>) {
        match self.shared.listeners.write() {
            Ok(mut listeners) => listeners.push(listener),
            Err(e) => e.into_inner().push(listener),
        }
    }

    /// Append a batch; starts a worker right away when the slot is free.
    pub fn enqueue(&self, batch: Batch) {
        let claimed = {
            let mut state = self.shared.state();
            state.pending.push_back(batch);
            state.claim_next()
        };

        if let Some((batch, token)) = claimed {
            self.spawn_worker(batch, token);
        }
    }

    /// Request cooperative cancellation of the running batch.
    ///
    /// Takes effect before the next identifier; the command in flight finishes.
    /// Pending batches are untouched. Returns false when nothing is running.
    pub fn cancel(&self) -> bool {
        match self.shared.state().active.as_ref() {
            Some(active) => {
                active.token.cancel();
                true
            }
            None => false,
        }
    }

    /// Drop every batch that has not started yet; returns how many were dropped.
    pub fn clear_pending(&self) -> usize {
        let mut state = self.shared.state();
        let dropped = state.pending.len();
        state.pending.clear();
        if state.is_drained() {
            self.shared.drained.notify_all();
        }
        dropped
    }

    pub fn pending_len(&self) -> usize {
        self.shared.state().pending.len()
    }

    pub fn state(&self) -> WorkerState {
        match self.shared.state().active.as_ref() {
            None => WorkerState::Idle,
            Some(active) if active.finished => WorkerState::Finished,
            Some(active) if active.token.is_cancelled() => WorkerState::Cancelling,
            Some(_) => WorkerState::Running,
        }
    }

    /// No worker in the slot and nothing pending.
    pub fn is_idle(&self) -> bool {
        let state = self.shared.state();
        state.active.is_none() && state.pending.is_empty()
    }

    /// Block until every batch has run and its terminal summary was delivered.
    pub fn wait_idle(&self) {
        let state = self.shared.state();
        let _state = self
            .shared
            .drained
            .wait_while(state, |s| !s.is_drained())
            .unwrap_or_else(|e| e.into_inner());
    }

    /// Like [`TaskQueue::wait_idle`] with an upper bound; returns false on timeout.
    pub fn wait_idle_timeout(&self, timeout: Duration) -> bool {
        let state = self.shared.state();
        let (_state, result) = self
            .shared
            .drained
            .wait_timeout_while(state, timeout, |s| !s.is_drained())
            .unwrap_or_else(|e| e.into_inner());
        !result.timed_out()
    }

    fn spawn_worker(&self, batch: Batch, token: CancellationToken) {
        let mut claimed = Some((batch, token));

        while let Some((batch, token)) = claimed.take() {
            let shared = Arc::clone(&self.shared);
            let spawned = thread::Builder::new()
                .name("pkgdeck-worker".to_string())
                .spawn(move || run_worker(&shared, batch, token));

            if let Err(e) = spawned {
                ui::error(&format!("Failed to start worker thread: {}", e));
                self.shared.emit_progress(&ProgressEvent::new(
                    format!("Failed to start worker: {}", e),
                    0,
                ));
                claimed = self.shared.finish(Summary::Cancelled);
            }
        }
    }
}

/// Worker thread body: run the claimed batch, then keep draining the queue.
fn run_worker(shared: &Shared, batch: Batch, token: CancellationToken) {
    let mut current = Some((batch, token));

    while let Some((batch, token)) = current.take() {
        ui::verbose(&format!(
            "Starting batch: {} ({} package(s))",
            batch.action,
            batch.len()
        ));

        let summary = worker::run_batch(&batch, shared.ops.as_ref(), &token, |event| {
            shared.emit_progress(&event)
        });

        shared.mark_finished();
        current = shared.finish(summary);
    }
}
