//! Inspection of deployed executor, governor and signature storage
//! contracts, plus the one signature-storage write the operators need.

pub mod events;
pub mod metrics;
pub mod status;
pub mod watcher;

pub use events::{
    executor_events, governor_events, watch_executor, watch_governor, ContractKind, EventRecord,
    EventWatch,
};
pub use metrics::{install_prometheus_exporter, Metrics};
pub use status::{executor_status, governor_status, ExecutorStatus, GovernorStatus, HookStatus};
pub use watcher::run_watches;
