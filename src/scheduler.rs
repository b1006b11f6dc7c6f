//! Recurring background tasks with explicit start and cancel.
//!
//! A [`ScheduledTask`] owns a tokio task that fires a callback on a fixed
//! period. Cancelling (or dropping) the handle aborts the task, so no tick is
//! delivered after the owner has gone away.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// When the first tick fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstTick {
    /// Right away, then every period
    Immediate,
    /// One full period after start
    AfterPeriod,
}

/// Handle to a running periodic task.
#[derive(Debug)]
pub struct ScheduledTask {
    name: &'static str,
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Start a task whose callback runs synchronously on every tick.
    ///
    /// The task stops on its own when the callback returns `false`.
    /// Must be called from within a tokio runtime.
    pub fn start<F>(name: &'static str, period: Duration, first: FirstTick, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        Self::start_async(name, period, first, move || {
            let keep_going = on_tick();
            async move { keep_going }
        })
    }

    /// Start a task whose callback is awaited on every tick.
    ///
    /// Ticks never overlap: a slow callback delays the next tick instead of
    /// running concurrently with it.
    pub fn start_async<F, Fut>(
        name: &'static str,
        period: Duration,
        first: FirstTick,
        mut on_tick: F,
    ) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        let start = match first {
            FirstTick::Immediate => Instant::now(),
            FirstTick::AfterPeriod => Instant::now() + period,
        };

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !on_tick().await {
                    tracing::debug!("Scheduled task '{}' stopped itself", name);
                    break;
                }
            }
        });

        tracing::debug!("Scheduled task '{}' started ({:?})", name, period);
        Self {
            name,
            period,
            handle: Some(handle),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the task is still scheduled.
    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Abort the task. Subsequent calls are no-ops.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Scheduled task '{}' cancelled", self.name);
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
