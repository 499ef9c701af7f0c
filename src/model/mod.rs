/**
 * Core data model shared across the gateway, the exchange adapter, the
 * subscription registry, the task queue, and the change-event dispatcher:
 * subscription keys, live/archived rows, tasks, sessions, and the
 * event-shape-only types for the externally-owned alert/signal tables.
 */
mod archive_row;
mod event_shapes;
mod exchange;
mod live_row;
mod session;
mod subscription_key;
mod task;

pub use archive_row::ArchiveRow;
pub use event_shapes::{AlertConfigEvent, AlertConfigEventKind, SignalRowEvent};
pub use exchange::Exchange;
pub use live_row::{LivePayload, LiveRow};
pub use session::{ClientSession, PendingRequest};
pub use subscription_key::{MarketType, StreamType, SubscriptionKey};
pub use task::{Task, TaskStatus, TaskType};
