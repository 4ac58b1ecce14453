//! Refresh Scheduler - single intake for timer and selection triggers
//!
//! Both the fixed 30-second cadence and user selection changes funnel into
//! one trigger channel consumed by one scheduler task. Every launched fetch
//! carries a monotonically increasing sequence number; a completion is
//! forwarded to the event loop only if its sequence number beats the highest
//! applied so far. A slow response to an old trigger can therefore never
//! overwrite a newer snapshot. Overtaken requests are discarded on arrival,
//! not cancelled in flight.

use crate::fetcher::{FetchError, SnapshotFetcher};
use netscope_common::TelemetrySnapshot;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A refresh request entering the scheduler's single intake point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Periodic cadence tick.
    Tick,

    /// User picked a new time window. Takes effect immediately for this and
    /// every later fetch.
    Selection(u32),
}

/// One planned fetch: which window, tagged with its launch sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPlan {
    pub seq: u64,
    pub minutes: u32,
}

/// Completion of one launched fetch.
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub minutes: u32,
    pub result: Result<TelemetrySnapshot, FetchError>,
}

/// Pure planning core: current window, sequence numbering, stale suppression.
///
/// Kept free of I/O so the ordering rules are directly testable.
#[derive(Debug)]
pub struct RefreshPlanner {
    minutes: u32,
    next_seq: u64,
    highest_applied: u64,
}

impl RefreshPlanner {
    pub fn new(minutes: u32) -> Self {
        Self {
            minutes,
            next_seq: 1,
            highest_applied: 0,
        }
    }

    /// Current time-range selection in minutes.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Plan the fetch for one trigger.
    pub fn plan(&mut self, trigger: Trigger) -> FetchPlan {
        if let Trigger::Selection(minutes) = trigger {
            self.minutes = minutes;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        FetchPlan {
            seq,
            minutes: self.minutes,
        }
    }

    /// Accept a completion only if it is newer than everything applied so
    /// far.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq > self.highest_applied {
            self.highest_applied = seq;
            true
        } else {
            false
        }
    }
}

/// Handle for feeding selection changes into the running scheduler.
#[derive(Clone)]
pub struct SchedulerHandle {
    triggers: mpsc::UnboundedSender<Trigger>,
}

impl SchedulerHandle {
    /// The user picked a new window: fetch right away rather than waiting out
    /// the timer.
    pub fn selection_changed(&self, minutes: u32) {
        let _ = self.triggers.send(Trigger::Selection(minutes));
    }
}

/// Spawn the scheduler task.
///
/// Returns the trigger handle and the channel of accepted snapshots, ready
/// for the event loop to drain. The first cadence tick fires immediately, so
/// the dashboard loads once at startup before settling into the period.
pub fn spawn(
    fetcher: SnapshotFetcher,
    initial_minutes: u32,
    period: Duration,
) -> (SchedulerHandle, mpsc::Receiver<TelemetrySnapshot>) {
    let (triggers_tx, mut triggers_rx) = mpsc::unbounded_channel();
    let (snapshots_tx, snapshots_rx) = mpsc::channel(8);

    tokio::spawn(async move {
        let fetcher = Arc::new(fetcher);
        let mut planner = RefreshPlanner::new(initial_minutes);
        let (outcomes_tx, mut outcomes_rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let mut ticker = tokio::time::interval(period);

        loop {
            let trigger = tokio::select! {
                _ = ticker.tick() => Some(Trigger::Tick),
                trigger = triggers_rx.recv() => trigger,
                Some(outcome) = outcomes_rx.recv() => {
                    handle_outcome(outcome, &mut planner, &snapshots_tx).await;
                    continue;
                }
            };

            // The event loop dropped its handle: shut down.
            let Some(trigger) = trigger else { break };

            let plan = planner.plan(trigger);
            launch(plan, fetcher.clone(), outcomes_tx.clone());
        }
    });

    (
        SchedulerHandle {
            triggers: triggers_tx,
        },
        snapshots_rx,
    )
}

/// Launch one fetch as its own task so a slow backend never blocks the
/// cadence or the UI.
fn launch(
    plan: FetchPlan,
    fetcher: Arc<SnapshotFetcher>,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        debug!("Launching snapshot fetch #{} (minutes={})", plan.seq, plan.minutes);
        let result = fetcher.fetch(plan.minutes).await;
        let _ = outcomes.send(FetchOutcome {
            seq: plan.seq,
            minutes: plan.minutes,
            result,
        });
    });
}

async fn handle_outcome(
    outcome: FetchOutcome,
    planner: &mut RefreshPlanner,
    snapshots: &mpsc::Sender<TelemetrySnapshot>,
) {
    match outcome.result {
        Ok(snapshot) => {
            if planner.accept(outcome.seq) {
                let _ = snapshots.send(snapshot).await;
            } else {
                debug!("Discarding overtaken snapshot #{}", outcome.seq);
            }
        }
        Err(e) => {
            // Views keep their last-known-good content; the next trigger
            // retries on the normal cadence.
            warn!(
                "Snapshot fetch #{} (minutes={}) failed: {}",
                outcome.seq, outcome.minutes, e
            );
        }
    }
}
