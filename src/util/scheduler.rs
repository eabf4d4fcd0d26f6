//! Deferred one-shot tasks with explicit cancellation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session-expiry interceptor defers its clear-and-redirect by a short
//! grace period. Scheduling goes through the [`Scheduler`] trait so browser
//! builds use a real timer while tests drive a virtual clock with
//! [`ManualScheduler`] and never sleep.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Something that can run a task after a delay.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TaskState {
    Pending,
    Ran,
    Cancelled,
}

/// Handle to a scheduled task. Clones refer to the same task.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    state: Rc<Cell<TaskState>>,
}

impl TaskHandle {
    fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(TaskState::Pending)),
        }
    }

    /// Prevent the task from running. No effect once it has run.
    pub fn cancel(&self) {
        if self.is_pending() {
            self.state.set(TaskState::Cancelled);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.get() == TaskState::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.get() == TaskState::Cancelled
    }

    /// Mark the task as started. Returns `false` if it was cancelled or
    /// already ran, in which case the caller must not run it.
    fn begin(&self) -> bool {
        if self.is_pending() {
            self.state.set(TaskState::Ran);
            true
        } else {
            false
        }
    }
}

struct Scheduled {
    deadline: u64,
    seq: u64,
    handle: TaskHandle,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: u64,
    seq: u64,
    queue: Vec<Scheduled>,
}

/// Virtual-clock scheduler. Nothing runs until [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock.
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Tasks still waiting to run (cancelled ones excluded).
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .queue
            .iter()
            .filter(|s| s.handle.is_pending())
            .count()
    }

    /// Move the clock forward and run every task that became due, earliest
    /// deadline first, ties in scheduling order.
    pub fn advance(&self, ms: u64) {
        self.clock.borrow_mut().now += ms;
        while let Some(next) = self.pop_due() {
            if next.handle.begin() {
                (next.task)();
            }
        }
    }

    fn pop_due(&self) -> Option<Scheduled> {
        let mut clock = self.clock.borrow_mut();
        let now = clock.now;
        let index = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.deadline <= now)
            .min_by_key(|(_, s)| (s.deadline, s.seq))
            .map(|(i, _)| i)?;
        Some(clock.queue.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let handle = TaskHandle::new();
        let mut clock = self.clock.borrow_mut();
        let scheduled = Scheduled {
            deadline: clock.now + u64::from(delay_ms),
            seq: clock.seq,
            handle: handle.clone(),
            task,
        };
        clock.seq += 1;
        clock.queue.push(scheduled);
        handle
    }
}

/// Browser scheduler backed by `setTimeout`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "csr")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let handle = TaskHandle::new();
        let fire = handle.clone();
        // Cancellation is tracked on the handle, so the timer itself can be
        // released to the browser.
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            if fire.begin() {
                task();
            }
        })
        .forget();
        handle
    }
}
