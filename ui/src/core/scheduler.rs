//! Cancellable timers behind one small trait.
//!
//! Components never call `setTimeout`/`sleep` directly. They ask a [`Timers`]
//! implementation for a repeating or one-shot timer, keep the returned
//! [`TimerId`], and cancel it when the timer is superseded or the component is
//! torn down. Fired timers come back as plain event values that the owner
//! feeds into its state machine.
//!
//! Two implementations:
//! - [`VirtualScheduler`]: a deterministic fake clock. Time only moves when the
//!   caller advances it; used by tests to check exact firing counts.
//! - [`LiveTimers`]: one Dioxus task per timer that sleeps on the wall clock
//!   and posts the event into a coroutine channel.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::Task;
use futures_channel::mpsc::UnboundedSender;

use super::{platform, timing};

/// Opaque handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

pub trait Timers<E> {
    /// Deliver `event` every `period_ms`, first after one full period.
    fn every(&mut self, period_ms: u64, event: E) -> TimerId;

    /// Deliver `event` once after `delay_ms`.
    fn after(&mut self, delay_ms: u64, event: E) -> TimerId;

    /// Cancel a pending timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct Scheduled<E> {
    id: TimerId,
    due_ms: u64,
    period_ms: Option<u64>,
    event: E,
}

/// Fake clock starting at t = 0 ms.
#[derive(Debug, Clone)]
pub struct VirtualScheduler<E> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Scheduled<E>>,
}

impl<E> Default for VirtualScheduler<E> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<E: Clone> VirtualScheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers that can still fire.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to
    /// its due time. Ties fire in scheduling order. Repeating timers are
    /// re-armed one period later.
    pub fn next_due(&mut self, until_ms: u64) -> Option<E> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.id))
            .map(|(pos, _)| pos)?;

        let due_ms = self.pending[pos].due_ms;
        self.now_ms = self.now_ms.max(due_ms);

        match self.pending[pos].period_ms {
            Some(period) => {
                let timer = &mut self.pending[pos];
                timer.due_ms = due_ms + period.max(1);
                Some(timer.event.clone())
            }
            None => Some(self.pending.remove(pos).event),
        }
    }

    /// Fire everything due up to `until_ms`, handing each event to `dispatch`
    /// together with the scheduler so handlers can arm or cancel timers.
    /// Returns how many events fired; the clock ends at `until_ms`.
    pub fn run_until<F>(&mut self, until_ms: u64, mut dispatch: F) -> usize
    where
        F: FnMut(E, &mut Self),
    {
        let mut fired = 0;
        while let Some(event) = self.next_due(until_ms) {
            dispatch(event, self);
            fired += 1;
        }
        self.now_ms = self.now_ms.max(until_ms);
        fired
    }

    fn insert(&mut self, due_ms: u64, period_ms: Option<u64>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due_ms,
            period_ms,
            event,
        });
        id
    }
}

impl<E: Clone> Timers<E> for VirtualScheduler<E> {
    fn every(&mut self, period_ms: u64, event: E) -> TimerId {
        let period = period_ms.max(1);
        self.insert(self.now_ms + period, Some(period), event)
    }

    fn after(&mut self, delay_ms: u64, event: E) -> TimerId {
        self.insert(self.now_ms + delay_ms, None, event)
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|timer| timer.id != id);
    }
}

struct LiveTimer {
    task: Task,
    finished: Rc<Cell<bool>>,
}

/// Wall-clock timers posting into a coroutine channel of message type `M`.
///
/// Must be created and used inside a Dioxus scope (tasks are spawned on the
/// runtime). Dropping the value cancels every timer still running.
pub struct LiveTimers<M: 'static> {
    tx: UnboundedSender<M>,
    next_id: u64,
    running: HashMap<TimerId, LiveTimer>,
}

impl<M: 'static> LiveTimers<M> {
    pub fn new(tx: UnboundedSender<M>) -> Self {
        Self {
            tx,
            next_id: 0,
            running: HashMap::new(),
        }
    }

    /// Cancel every timer still running.
    pub fn cancel_all(&mut self) {
        for (_, timer) in self.running.drain() {
            if !timer.finished.get() {
                timer.task.cancel();
            }
        }
    }

    fn track(&mut self, task: Task, finished: Rc<Cell<bool>>) -> TimerId {
        // One-shot timers that already fired no longer own a live task.
        self.running.retain(|_, timer| !timer.finished.get());
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.running.insert(id, LiveTimer { task, finished });
        id
    }
}

impl<M, E> Timers<E> for LiveTimers<M>
where
    M: 'static,
    E: Into<M> + Clone + 'static,
{
    fn every(&mut self, period_ms: u64, event: E) -> TimerId {
        let tx = self.tx.clone();
        let finished = Rc::new(Cell::new(false));
        let done = finished.clone();
        let task = platform::spawn_future(async move {
            loop {
                timing::sleep_ms(period_ms.max(1)).await;
                if tx.unbounded_send(event.clone().into()).is_err() {
                    break;
                }
            }
            done.set(true);
        });
        self.track(task, finished)
    }

    fn after(&mut self, delay_ms: u64, event: E) -> TimerId {
        let tx = self.tx.clone();
        let finished = Rc::new(Cell::new(false));
        let done = finished.clone();
        let task = platform::spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            done.set(true);
            let _ = tx.unbounded_send(event.into());
        });
        self.track(task, finished)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(timer) = self.running.remove(&id) {
            if !timer.finished.get() {
                timer.task.cancel();
            }
        }
    }
}

impl<M: 'static> Drop for LiveTimers<M> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_at_its_due_time() {
        let mut sched = VirtualScheduler::new();
        sched.after(100, "ping");

        assert_eq!(sched.next_due(99), None);
        assert_eq!(sched.next_due(100), Some("ping"));
        assert_eq!(sched.now_ms(), 100);
        assert_eq!(sched.next_due(10_000), None);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn interval_rearms_every_period() {
        let mut sched = VirtualScheduler::new();
        sched.every(50, 'x');

        let fired = sched.run_until(500, |_, _| {});
        assert_eq!(fired, 10);
        assert_eq!(sched.pending(), 1);
        assert_eq!(sched.now_ms(), 500);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut sched = VirtualScheduler::new();
        let tick = sched.every(10, 1);
        let once = sched.after(5, 2);
        sched.cancel(tick);
        sched.cancel(once);

        assert_eq!(sched.run_until(1_000, |_, _| {}), 0);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut sched = VirtualScheduler::new();
        sched.after(20, "first");
        sched.after(20, "second");
        sched.after(10, "earliest");

        let mut order = Vec::new();
        sched.run_until(20, |event, _| order.push(event));
        assert_eq!(order, vec!["earliest", "first", "second"]);
    }

    #[test]
    fn handlers_can_schedule_relative_to_the_firing_time() {
        let mut sched = VirtualScheduler::new();
        sched.after(100, 0u32);

        let mut seen = Vec::new();
        sched.run_until(1_000, |hop, s| {
            seen.push((s.now_ms(), hop));
            if hop < 2 {
                s.after(100, hop + 1);
            }
        });
        assert_eq!(seen, vec![(100, 0), (200, 1), (300, 2)]);
    }
}
