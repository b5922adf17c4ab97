use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    thread,
    time::Duration,
};

use tracing::{debug, error};

use crate::{
    client::{PredictionClient, SubmitError},
    form::{FormEvent, SubmissionRequest},
};

/// Runs each submission on its own thread and hands the outcome back as a
/// [`FormEvent::Settled`].
pub(crate) struct SubmissionWorker {
    client: Arc<dyn PredictionClient>,
    sender: Sender<FormEvent>,
    receiver: Receiver<FormEvent>,
}

impl SubmissionWorker {
    pub(crate) fn new(client: Arc<dyn PredictionClient>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            client,
            sender,
            receiver,
        }
    }

    pub(crate) fn dispatch(&self, request: SubmissionRequest) {
        let SubmissionRequest { attempt, payload } = request;
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();
        let spawned = thread::Builder::new()
            .name(format!("predict-{attempt}"))
            .spawn(move || {
                let outcome = client.predict(&payload);
                // The receiver is gone once the UI has shut down.
                let _ = sender.send(FormEvent::Settled { attempt, outcome });
            });
        if let Err(err) = spawned {
            error!(attempt, error = %err, "failed to start submission thread");
            let _ = self.sender.send(FormEvent::Settled {
                attempt,
                outcome: Err(SubmitError::Transport(err.to_string())),
            });
        } else {
            debug!(attempt, "submission thread started");
        }
    }

    /// Collects every outcome that arrived since the last call.
    pub(crate) fn drain(&self) -> Vec<FormEvent> {
        self.receiver.try_iter().collect()
    }

    /// Blocks until the next outcome arrives or `timeout` elapses.
    pub(crate) fn wait(&self, timeout: Duration) -> Option<FormEvent> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}
