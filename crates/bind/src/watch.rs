//! Background delivery of live events into a caller-owned channel.

use crate::{BindError, DecodedLog, LogSubscription, Result};
use alloy_sol_types::SolEvent;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};
use tracing::{debug, warn};

/// Handle to a running watch task.
///
/// Dropping the handle (or the sink receiver) stops the task.
#[derive(Debug)]
pub struct Subscription {
    quit: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<()>>,
}

impl Subscription {
    /// Ask the task to stop. Safe to call repeatedly.
    pub fn unsubscribe(&mut self) {
        if let Some(quit) = self.quit.take() {
            let _ = quit.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the task to end and return the error that ended it, if any.
    pub async fn wait(self) -> Result<()> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(BindError::Subscription(e.to_string())),
        }
    }
}

/// Spawn a task that decodes every log of `subscription` as `E` and
/// forwards it to `sink`.
///
/// The task ends when the subscription completes or fails, when a log does
/// not decode, when the sink receiver is dropped or when the returned
/// handle is unsubscribed or dropped. The underlying subscription is always
/// unsubscribed on exit.
pub fn spawn_watch<E>(
    mut subscription: LogSubscription,
    sink: mpsc::Sender<DecodedLog<E>>,
) -> Subscription
where
    E: SolEvent + Send + Sync + 'static,
{
    let (quit_tx, mut quit) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let result = loop {
            let (logs, errors) = subscription.split();

            let log = tokio::select! {
                biased;

                _ = &mut quit => break Ok(()),
                Some(err) = errors.recv() => break Err(err),
                log = logs.recv() => match log {
                    Some(log) => log,
                    None => break Ok(()),
                },
            };

            let event = match DecodedLog::<E>::decode(log) {
                Ok(event) => event,
                Err(err) => break Err(err),
            };

            tokio::select! {
                biased;

                _ = &mut quit => break Ok(()),
                Some(err) = errors.recv() => break Err(err),
                sent = sink.send(event) => {
                    if sent.is_err() {
                        debug!(event = E::SIGNATURE, "watch sink closed");
                        break Ok(());
                    }
                }
            }
        };

        subscription.unsubscribe();
        if let Err(err) = &result {
            warn!(event = E::SIGNATURE, error = %err, "watch terminated");
        }
        result
    });

    Subscription {
        quit: Some(quit_tx),
        task,
    }
}
