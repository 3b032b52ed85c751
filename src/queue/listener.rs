use crate::core::types::{ProgressEvent, Summary};
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, Sender};

/// Observer for batch execution.
///
/// Callbacks run on the worker thread, one at a time, in emission order.
/// They must not block on the queue itself (e.g. `TaskQueue::wait_idle`).
pub trait ProgressListener: Send + Sync {
    fn on_progress(&self, event: &ProgressEvent);

    /// Terminal summary of one batch; always the last event of that batch.
    fn on_finished(&self, summary: Summary);
}

/// Owned form of everything a listener can receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum WorkerEvent {
    Progress(ProgressEvent),
    Finished(Summary),
}

impl WorkerEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Forwards every event into an `mpsc` channel.
pub struct ChannelListener {
    tx: Sender<WorkerEvent>,
}

impl ChannelListener {
    pub fn new() -> (Self, Receiver<WorkerEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl ProgressListener for ChannelListener {
    fn on_progress(&self, event: &ProgressEvent) {
        // A dropped receiver just means nobody is watching any more.
        let _ = self.tx.send(WorkerEvent::Progress(event.clone()));
    }

    fn on_finished(&self, summary: Summary) {
        let _ = self.tx.send(WorkerEvent::Finished(summary));
    }
}
