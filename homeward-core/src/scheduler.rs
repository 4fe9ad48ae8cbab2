//! Timer seam.
//!
//! Every delay in Homeward is a scheduled callback. Hosts provide the real
//! event-loop timers; [`ManualScheduler`] drives a virtual clock for headless
//! hosts and tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Deferred unit of work run by a [`Scheduler`].
pub type Task = Box<dyn FnOnce()>;

/// Opaque handle returned by [`Scheduler::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Single-threaded timer queue.
pub trait Scheduler {
    /// Run `task` once, `delay_ms` milliseconds from now.
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId;

    /// Drop a pending task. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TimerId);

    /// Drop every pending task.
    fn cancel_all(&self);
}

/// Virtual-clock scheduler. Nothing runs until [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    next_id: Cell<u64>,
    queue: RefCell<BTreeMap<(u64, u64), Task>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Number of tasks still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward, running due tasks in deadline order.
    ///
    /// Tasks scheduled while advancing run too if they fall due before the
    /// new time. Returns how many tasks ran.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.now_ms.get().saturating_add(ms);
        let mut ran = 0;
        loop {
            let next = self.queue.borrow().keys().next().copied();
            let Some(key) = next.filter(|(due, _)| *due <= target) else {
                break;
            };
            let task = self.queue.borrow_mut().remove(&key);
            self.now_ms.set(key.0);
            if let Some(task) = task {
                task();
                ran += 1;
            }
        }
        self.now_ms.set(target);
        ran
    }

    /// Run everything queued, however far in the future.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.queue.borrow().keys().next().copied();
            let Some((due, _)) = next else {
                return ran;
            };
            ran += self.advance(due.saturating_sub(self.now_ms.get()));
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let due = self.now_ms.get().saturating_add(u64::from(delay_ms));
        self.queue.borrow_mut().insert((due, id), task);
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        let key = self.queue.borrow().keys().find(|(_, k)| *k == id.0).copied();
        if let Some(key) = key {
            let task = self.queue.borrow_mut().remove(&key);
            drop(task);
        }
    }

    fn cancel_all(&self) {
        let drained = std::mem::take(&mut *self.queue.borrow_mut());
        drop(drained);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn runs_tasks_in_deadline_order() {
        let sched = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = Rc::clone(&log);
            sched.schedule(delay, Box::new(move || log.borrow_mut().push(label)));
        }
        assert_eq!(sched.advance(15), 1);
        assert_eq!(sched.advance(100), 2);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(sched.now_ms(), 115);
    }

    #[test]
    fn cancelled_tasks_never_run() {
        let sched = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let id = sched.schedule(5, Box::new(move || h.set(h.get() + 1)));
        sched.cancel(id);
        sched.cancel(TimerId(999));
        assert_eq!(sched.run_until_idle(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn tasks_scheduled_while_running_are_picked_up() {
        let sched = Rc::new(ManualScheduler::new());
        let hits = Rc::new(Cell::new(0));
        let inner_sched = Rc::clone(&sched);
        let inner_hits = Rc::clone(&hits);
        sched.schedule(
            10,
            Box::new(move || {
                let h = Rc::clone(&inner_hits);
                inner_sched.schedule(5, Box::new(move || h.set(h.get() + 1)));
            }),
        );
        assert_eq!(sched.advance(20), 2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn cancel_all_empties_queue() {
        let sched = ManualScheduler::new();
        sched.schedule(1, Box::new(|| {}));
        sched.schedule(2, Box::new(|| {}));
        sched.cancel_all();
        assert_eq!(sched.pending(), 0);
    }
}
