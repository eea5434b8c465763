//! The cooperative tick scheduler.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{self, AtomicU64};

use parking_lot::Mutex;

/// A deferred unit of work run on the host main thread.
pub type Task = Box<dyn FnOnce() + Send>;

/// The host's "run later" primitives.
///
/// Implementations run every task on the host main thread. Nothing runs
/// synchronously with the schedule call; a zero delay still waits for
/// the next tick.
pub trait Scheduler: Send + Sync {
    /// Runs `task` on the next tick.
    fn run_task(&self, task: Task);

    /// Runs `task` after `delay` ticks.
    fn run_task_later(&self, delay: u64, task: Task);
}

struct ScheduledTask {
    trigger_tick: u64,
    /// Insertion order, for FIFO among tasks due the same tick.
    sequence: u64,
    task: Task,
}

impl PartialEq for ScheduledTask {
    fn eq(&self, other: &Self) -> bool {
        self.trigger_tick == other.trigger_tick && self.sequence == other.sequence
    }
}

impl Eq for ScheduledTask {}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earlier trigger_tick first, then insertion order (min-heap
        // behavior on BinaryHeap via reversed comparison).
        other
            .trigger_tick
            .cmp(&self.trigger_tick)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A binary-heap tick queue drained by the host main loop.
///
/// [`TickQueue::tick`] advances the clock one tick and runs every due
/// task on the calling thread, which is the main thread by contract.
#[derive(Default)]
pub struct TickQueue {
    pending: Mutex<BinaryHeap<ScheduledTask>>,
    current_tick: AtomicU64,
    next_sequence: AtomicU64,
}

impl TickQueue {
    /// Creates an empty queue at tick zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current tick.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.current_tick.load(atomic::Ordering::Relaxed)
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }

    /// Advances the clock one tick and runs every due task.
    pub fn tick(&self) {
        let now = self.current_tick.fetch_add(1, atomic::Ordering::Relaxed) + 1;

        // Drain due tasks before running any: a task may schedule more
        // work, which must not run until its own trigger tick.
        let mut due = Vec::new();
        {
            let mut pending = self.pending.lock();
            while let Some(next) = pending.peek() {
                if next.trigger_tick > now {
                    break;
                }
                if let Some(task) = pending.pop() {
                    due.push(task);
                }
            }
        }

        for scheduled in due {
            (scheduled.task)();
        }
    }

    fn push(&self, delay: u64, task: Task) {
        let trigger_tick = self.current_tick() + delay.max(1);
        let sequence = self.next_sequence.fetch_add(1, atomic::Ordering::Relaxed);
        log::trace!("scheduled task for tick {trigger_tick} (delay={delay})");
        self.pending.lock().push(ScheduledTask {
            trigger_tick,
            sequence,
            task,
        });
    }
}

impl Scheduler for TickQueue {
    fn run_task(&self, task: Task) {
        self.push(1, task);
    }

    fn run_task_later(&self, delay: u64, task: Task) {
        self.push(delay, task);
    }
}
