use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, instrument};

use crate::dispatcher::ReconcileSignal;
use crate::registry::SubscriptionRegistry;
use crate::Result;

/// Minimal add/remove set an upstream connection pool must apply to reach `actual == desired`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

impl ReconcilePlan {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Applies a [`ReconcilePlan`] to the physical upstream connections — one implementation per
/// exchange/stream-family connection pool (§4.5's "per-stream families").
#[async_trait::async_trait]
pub trait UpstreamCommander: Send + Sync {
    async fn apply(&self, plan: ReconcilePlan) -> Result<()>;
}

/**
 * Tracks `actual: set<key>` — the streams currently live on the upstream
 * multiplex — and turns registry deltas or a full snapshot into the
 * minimal plan needed to converge `actual` on `desired`.
 */
pub struct Reconciler {
    actual: HashSet<String>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self { actual: HashSet::new() }
    }

    /// Folds a batch of coalesced add/remove deltas into a plan, updating `actual` in place.
    pub fn apply_delta(&mut self, adds: &HashSet<String>, removes: &HashSet<String>) -> ReconcilePlan {
        let add: Vec<String> = adds.difference(&self.actual).cloned().collect();
        let remove: Vec<String> = removes.intersection(&self.actual).cloned().collect();

        for key in &add {
            self.actual.insert(key.clone());
        }
        for key in &remove {
            self.actual.remove(key);
        }

        ReconcilePlan { add, remove }
    }

    /// Full diff against `desired` (the registry's `snapshot()`), used on `subscription.clean`
    /// and upstream reconnect.
    pub fn full_diff(&mut self, desired: &HashSet<String>) -> ReconcilePlan {
        let add: Vec<String> = desired.difference(&self.actual).cloned().collect();
        let remove: Vec<String> = self.actual.difference(desired).cloned().collect();
        self.actual = desired.clone();
        ReconcilePlan { add, remove }
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * Runs the coalescing reconciliation loop: buffers `subscription.add`/
 * `.remove` signals for `coalesce_window` and flushes them as one batched
 * plan; a `Clean` signal triggers an immediate full diff against the
 * registry's current snapshot, bypassing the coalescing window.
 */
#[instrument(skip_all)]
pub async fn run_reconcile_loop(
    mut rx: mpsc::Receiver<ReconcileSignal>,
    registry: Arc<SubscriptionRegistry>,
    commander: Arc<dyn UpstreamCommander>,
    coalesce_window: Duration,
) -> Result<()> {
    let mut reconciler = Reconciler::new();
    let mut pending_add = HashSet::new();
    let mut pending_remove = HashSet::new();
    let mut ticker = interval(coalesce_window);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            signal = rx.recv() => {
                match signal {
                    Some(ReconcileSignal::Add(key)) => {
                        pending_remove.remove(&key);
                        pending_add.insert(key);
                    }
                    Some(ReconcileSignal::Remove(key)) => {
                        pending_add.remove(&key);
                        pending_remove.insert(key);
                    }
                    Some(ReconcileSignal::Clean) => {
                        info!("performing full reconciliation after resync signal");
                        let desired: HashSet<String> = registry.snapshot().await?.into_iter().collect();
                        let plan = reconciler.full_diff(&desired);
                        pending_add.clear();
                        pending_remove.clear();
                        if !plan.is_empty() {
                            commander.apply(plan).await?;
                        }
                    }
                    None => return Ok(()),
                }
            }
            _ = ticker.tick() => {
                if !pending_add.is_empty() || !pending_remove.is_empty() {
                    let plan = reconciler.apply_delta(&pending_add, &pending_remove);
                    pending_add.clear();
                    pending_remove.clear();
                    if !plan.is_empty() {
                        commander.apply(plan).await?;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(keys: &[&str]) -> HashSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn delta_only_adds_keys_not_already_actual() {
        let mut reconciler = Reconciler::new();
        let plan = reconciler.apply_delta(&set(&["A", "B"]), &HashSet::new());
        assert_eq!(plan.add.len(), 2);

        let plan = reconciler.apply_delta(&set(&["B", "C"]), &HashSet::new());
        assert_eq!(plan.add, vec!["C".to_string()]);
    }

    #[test]
    fn delta_only_removes_keys_currently_actual() {
        let mut reconciler = Reconciler::new();
        reconciler.apply_delta(&set(&["A", "B"]), &HashSet::new());

        let plan = reconciler.apply_delta(&HashSet::new(), &set(&["A", "Z"]));
        assert_eq!(plan.remove, vec!["A".to_string()]);
    }

    #[test]
    fn full_diff_converges_actual_on_desired() {
        let mut reconciler = Reconciler::new();
        reconciler.apply_delta(&set(&["A", "B"]), &HashSet::new());

        let plan = reconciler.full_diff(&set(&["B", "C"]));
        assert_eq!(plan.add, vec!["C".to_string()]);
        assert_eq!(plan.remove, vec!["A".to_string()]);
    }
}
