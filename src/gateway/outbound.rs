use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, Notify};
use tracing::warn;

use crate::gateway::protocol::ServerFrame;

/**
 * Bounded per-session outbound queue with the §4.4 backpressure policy:
 * overflow drops the oldest non-closed-bar frame first; a `success`/
 * `error`/closed-bar frame is never dropped. If the queue stays full for
 * `slow_consumer_grace` the session executor closes the connection with
 * `SLOW_CONSUMER`.
 *
 * A plain bounded `mpsc` channel can't express "drop oldest" (it can only
 * reject the newest on `try_send`), so this is a `Mutex<VecDeque>` plus a
 * `Notify` instead — the session's write-out task awaits `Notify`, then
 * drains the deque in order, preserving strict per-session ordering.
 */
pub struct OutboundQueue {
    capacity: usize,
    inner: Mutex<Inner>,
    notify: Notify,
}

struct Inner {
    frames: VecDeque<ServerFrame>,
    full_since: Option<DateTime<Utc>>,
}

impl OutboundQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(Inner {
                frames: VecDeque::with_capacity(capacity),
                full_since: None,
            }),
            notify: Notify::new(),
        }
    }

    /// Enqueues a frame, applying the drop-oldest-non-closed-bar policy on overflow.
    pub async fn push(&self, frame: ServerFrame) {
        let mut inner = self.inner.lock().await;

        if inner.frames.len() >= self.capacity {
            let droppable_index = inner
                .frames
                .iter()
                .position(|queued| !queued.is_closed_bar_update() && !is_response_frame(queued));

            match droppable_index {
                Some(index) => {
                    inner.frames.remove(index);
                }
                None => {
                    warn!("outbound queue full of undroppable frames, forcing oldest out");
                    inner.frames.pop_front();
                }
            }
        }

        inner.frames.push_back(frame);
        if inner.frames.len() >= self.capacity {
            inner.full_since.get_or_insert_with(Utc::now);
        } else {
            inner.full_since = None;
        }
        drop(inner);
        self.notify.notify_one();
    }

    /// Waits for at least one frame, then drains everything currently queued, in order.
    pub async fn drain(&self) -> Vec<ServerFrame> {
        loop {
            {
                let mut inner = self.inner.lock().await;
                if !inner.frames.is_empty() {
                    inner.full_since = None;
                    return inner.frames.drain(..).collect();
                }
            }
            self.notify.notified().await;
        }
    }

    /// Whether the queue has been continuously full for at least `grace`, per the
    /// `SLOW_CONSUMER` eviction policy.
    pub async fn is_slow_consumer(&self, now: DateTime<Utc>, grace: chrono::Duration) -> bool {
        let inner = self.inner.lock().await;
        inner.full_since.is_some_and(|since| now - since >= grace)
    }
}

fn is_response_frame(frame: &ServerFrame) -> bool {
    matches!(frame, ServerFrame::Success { .. } | ServerFrame::Error { .. } | ServerFrame::Ack { .. })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(close: &str) -> ServerFrame {
        ServerFrame::update(0, serde_json::json!({"close": close, "is_closed": false}))
    }

    fn closed_bar() -> ServerFrame {
        ServerFrame::update(0, serde_json::json!({"is_closed": true}))
    }

    #[tokio::test]
    async fn overflow_drops_oldest_non_closed_bar_frame() {
        let queue = OutboundQueue::new(2);
        queue.push(tick("1")).await;
        queue.push(tick("2")).await;
        queue.push(tick("3")).await;

        let drained = queue.drain().await;
        assert_eq!(drained.len(), 2);
    }

    #[tokio::test]
    async fn closed_bar_frames_are_never_dropped() {
        let queue = OutboundQueue::new(2);
        queue.push(closed_bar()).await;
        queue.push(tick("1")).await;
        queue.push(tick("2")).await;

        let drained = queue.drain().await;
        assert!(drained.iter().any(|f| f.is_closed_bar_update()));
    }

    #[tokio::test]
    async fn becomes_slow_consumer_after_grace_window() {
        let queue = OutboundQueue::new(1);
        queue.push(tick("1")).await;

        assert!(!queue.is_slow_consumer(Utc::now(), chrono::Duration::seconds(5)).await);

        let later = Utc::now() + chrono::Duration::seconds(6);
        assert!(queue.is_slow_consumer(later, chrono::Duration::seconds(5)).await);
    }

    #[tokio::test]
    async fn draining_resets_full_since() {
        let queue = OutboundQueue::new(1);
        queue.push(tick("1")).await;
        queue.drain().await;
        assert!(!queue.is_slow_consumer(Utc::now() + chrono::Duration::seconds(10), chrono::Duration::seconds(5)).await);
    }
}
