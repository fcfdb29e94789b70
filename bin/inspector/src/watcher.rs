//! Drive a set of event watches until shutdown.

use crate::{EventRecord, EventWatch, Metrics};
use std::{future::Future, pin::pin, time::Duration};
use tokio::{sync::mpsc, time};
use tracing::{debug, error, info};

/// How often finished watches are collected and their errors reported.
const REAP_INTERVAL: Duration = Duration::from_secs(5);

/// Log every record until `shutdown` resolves or every watch ended.
///
/// Returns the number of records received. Watches still running at
/// shutdown are unsubscribed; failed ones are logged and counted.
pub async fn run_watches(
    mut watches: Vec<EventWatch>,
    mut records: mpsc::Receiver<EventRecord>,
    metrics: &Metrics,
    shutdown: impl Future<Output = ()>,
) -> usize {
    let mut shutdown = pin!(shutdown);
    let mut reap = time::interval(REAP_INTERVAL);
    let mut received = 0;

    metrics.set_active_watches(watches.len());
    info!(watches = watches.len(), "Watching events");

    loop {
        tokio::select! {
            () = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }
            record = records.recv() => {
                // Every relay is gone once every watch ended.
                let Some(record) = record else {
                    break;
                };

                metrics.record_event(&record);
                info!(
                    contract = %record.contract,
                    event = record.event,
                    block = ?record.block_number,
                    tx_hash = ?record.transaction_hash,
                    details = %record.details,
                    "Event"
                );
                received += 1;
            }
            _ = reap.tick() => {
                let (finished, running): (Vec<_>, Vec<_>) = std::mem::take(&mut watches)
                    .into_iter()
                    .partition(|watch| watch.subscription.is_finished());
                watches = running;

                for watch in finished {
                    finish(watch, metrics).await;
                }
                metrics.set_active_watches(watches.len());
            }
        }
    }

    for mut watch in watches {
        watch.subscription.unsubscribe();
        finish(watch, metrics).await;
    }
    metrics.set_active_watches(0);

    received
}

async fn finish(watch: EventWatch, metrics: &Metrics) {
    let EventWatch {
        contract,
        event,
        subscription,
    } = watch;

    match subscription.wait().await {
        Ok(()) => debug!(%contract, event, "Watch ended"),
        Err(e) => {
            metrics.record_watch_failure(contract, event);
            error!(%contract, event, error = %e, "Watch failed");
        }
    }
}
