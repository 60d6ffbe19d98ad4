use std::{collections::VecDeque, num::NonZeroU64};

use rustc_hash::FxHashSet;

use super::{Pid, Scheduler, TickCtx, is_quantum_boundary};

/// Round robin over a FIFO queue of pids.
///
/// Newly seen pids join the tail at each decision point. Pids that left the
/// snapshot are dropped lazily when they reach the head.
#[derive(Debug)]
pub struct RoundRobinQueueScheduler {
    quantum: NonZeroU64,
    queue: VecDeque<Pid>,
    // Mirrors `queue`; a pid is in one iff it is in the other
    queued: FxHashSet<Pid>,
}

impl RoundRobinQueueScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self {
            quantum,
            queue: VecDeque::new(),
            queued: FxHashSet::default(),
        }
    }

    /// Pids waiting for the CPU, head first.
    pub fn queued(&self) -> impl Iterator<Item = Pid> + '_ {
        self.queue.iter().copied()
    }

    fn push_back(&mut self, pid: Pid) {
        if self.queued.insert(pid) {
            self.queue.push_back(pid);
        }
    }

    fn pop_front(&mut self) -> Option<Pid> {
        let pid = self.queue.pop_front()?;
        let removed = self.queued.remove(&pid);
        debug_assert!(removed, "pid {pid} missing queue membership");
        Some(pid)
    }

    fn enqueue_all(&mut self, ctx: &TickCtx<'_>) {
        for p in ctx.procs {
            self.push_back(p.pid);
        }
    }
}

impl Scheduler for RoundRobinQueueScheduler {
    fn name(&self) -> &'static str {
        "rrq"
    }

    fn pick_next(&mut self, ctx: &TickCtx<'_>) -> Option<Pid> {
        if ctx.procs.is_empty() {
            return None;
        }

        if let Some(current) = ctx.current {
            if !is_quantum_boundary(ctx.now, self.quantum) {
                return Some(current);
            }
        }

        // New arrivals go to the back of the line, in arrival order
        self.enqueue_all(ctx);

        let active = ctx.active_pids();
        loop {
            match self.pop_front() {
                Some(pid) if active.contains(&pid) => return Some(pid),
                Some(stale) => {
                    log::debug!("t={} rrq: dropping stale pid {stale}", ctx.now);
                }
                None => {
                    log::debug!(
                        "t={} rrq: queue drained, refilling with {} pids",
                        ctx.now,
                        ctx.procs.len()
                    );
                    self.enqueue_all(ctx);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ProcessSnapshot, Ticks};
    use pretty_assertions::assert_eq;

    fn service(_pid: Pid) -> Ticks {
        500
    }

    fn procs(pids: &[Pid]) -> Vec<ProcessSnapshot> {
        pids.iter().map(|&pid| ProcessSnapshot::new(pid, 0)).collect()
    }

    fn rrq() -> RoundRobinQueueScheduler {
        RoundRobinQueueScheduler::new(NonZeroU64::new(50).unwrap())
    }

    #[test]
    fn first_decision_enqueues_everyone_and_runs_head() {
        let procs = procs(&[1, 2, 3]);
        let mut sched = rrq();

        let ctx = TickCtx::new(&procs, 0, None, &service);
        assert_eq!(sched.pick_next(&ctx), Some(1));
        assert_eq!(sched.queued().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn empty_snapshot_mid_quantum_is_idle() {
        let mut sched = rrq();
        let ctx = TickCtx::new(&[], 7, Some(3), &service);
        assert_eq!(sched.pick_next(&ctx), None);
        assert_eq!(sched.queued().count(), 0);
    }

    #[test]
    fn mid_quantum_does_not_touch_queue() {
        let mut sched = rrq();
        let all = procs(&[1, 2, 3]);
        let ctx = TickCtx::new(&all, 0, None, &service);
        sched.pick_next(&ctx);

        let grown = procs(&[1, 2, 3, 4]);
        let ctx = TickCtx::new(&grown, 20, Some(1), &service);
        assert_eq!(sched.pick_next(&ctx), Some(1));
        assert_eq!(sched.queued().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn terminated_pid_is_skipped_at_boundary() {
        let mut sched = rrq();
        let all = procs(&[1, 2, 3]);
        let ctx = TickCtx::new(&all, 0, None, &service);
        assert_eq!(sched.pick_next(&ctx), Some(1));

        // pid 2 finished before the boundary
        let left = procs(&[1, 3]);
        let ctx = TickCtx::new(&left, 50, Some(1), &service);
        assert_eq!(sched.pick_next(&ctx), Some(3));
        assert_eq!(sched.queued().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn running_pid_rejoins_behind_waiting_ones() {
        let mut sched = rrq();
        let all = procs(&[1, 2, 3]);
        let mut current = None;
        let mut picks = Vec::new();
        for n in 0..6 {
            let ctx = TickCtx::new(&all, n * 50, current, &service);
            current = sched.pick_next(&ctx);
            picks.push(current.unwrap());
        }
        assert_eq!(picks, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn late_arrival_joins_tail() {
        let mut sched = rrq();
        let pair = procs(&[1, 2]);
        let ctx = TickCtx::new(&pair, 0, None, &service);
        assert_eq!(sched.pick_next(&ctx), Some(1));

        let grown = procs(&[1, 2, 3]);
        let ctx = TickCtx::new(&grown, 50, Some(1), &service);
        assert_eq!(sched.pick_next(&ctx), Some(2));
        assert_eq!(sched.queued().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn stale_entries_drain_before_new_population() {
        let mut sched = rrq();
        let pair = procs(&[1, 2]);
        let ctx = TickCtx::new(&pair, 0, None, &service);
        sched.pick_next(&ctx);

        // Entirely new population; old entries drain first
        let fresh = procs(&[7, 8]);
        let ctx = TickCtx::new(&fresh, 50, None, &service);
        assert_eq!(sched.pick_next(&ctx), Some(7));
        assert_eq!(sched.queued().collect::<Vec<_>>(), vec![8]);
    }
}
