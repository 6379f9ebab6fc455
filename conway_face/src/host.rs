// host.rs - Host services for the face: timers and minute ticks on tokio

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use chrono::{Local, Timelike};
use conway_cells::Timer;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The evolution timer armed with this ticket ran out.
    TimerFired(u64),
    MinuteTick,
}

/// Wakes the egui loop once its context exists.
#[derive(Clone, Default)]
pub struct Waker(Arc<OnceLock<egui::Context>>);

impl Waker {
    pub fn attach(&self, ctx: egui::Context) {
        let _ = self.0.set(ctx);
    }

    pub fn wake(&self) {
        if let Some(ctx) = self.0.get() {
            ctx.request_repaint();
        }
    }
}

/// One-shot timer backed by an abortable sleep task.
///
/// Every `schedule` hands out a new ticket; a firing whose ticket is no
/// longer pending was cancelled after it was queued and must be dropped.
pub struct TokioTimer {
    runtime: Handle,
    events: UnboundedSender<HostEvent>,
    waker: Waker,
    pending: Option<(u64, JoinHandle<()>)>,
    next_ticket: u64,
}

impl TokioTimer {
    pub fn new(runtime: Handle, events: UnboundedSender<HostEvent>, waker: Waker) -> Self {
        Self { runtime, events, waker, pending: None, next_ticket: 0 }
    }

    /// Claim a firing. False for stale tickets.
    pub fn fire(&mut self, ticket: u64) -> bool {
        match self.pending {
            Some((pending, _)) if pending == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

impl Timer for TokioTimer {
    fn schedule(&mut self, after: Duration) {
        self.cancel();
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let events = self.events.clone();
        let waker = self.waker.clone();

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            if events.send(HostEvent::TimerFired(ticket)).is_ok() {
                waker.wake();
            }
        });
        self.pending = Some((ticket, task));
    }

    fn cancel(&mut self) {
        if let Some((_, task)) = self.pending.take() {
            task.abort();
        }
    }

    fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Time left until the next wall-clock minute starts.
pub fn until_next_minute() -> Duration {
    let now = Local::now();
    let into_minute = Duration::from_secs(now.second() as u64)
        + Duration::from_nanos(now.nanosecond().min(999_999_999) as u64);
    Duration::from_secs(60).saturating_sub(into_minute).max(Duration::from_millis(1))
}

/// Send `MinuteTick` at every minute boundary until aborted.
pub fn spawn_minute_ticker(
    runtime: &Handle,
    events: UnboundedSender<HostEvent>,
    waker: Waker,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        loop {
            tokio::time::sleep(until_next_minute()).await;
            if events.send(HostEvent::MinuteTick).is_err() {
                log::debug!("minute ticker stopped: receiver gone");
                break;
            }
            waker.wake();
        }
    })
}
