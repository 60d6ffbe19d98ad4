use std::num::NonZeroU64;

use super::{Pid, Scheduler, TickCtx, is_quantum_boundary};

/// Round robin over snapshot positions.
///
/// The cursor is an index into whatever snapshot arrives at the next quantum
/// boundary, not a pid. When processes finish or the order changes, "next"
/// shifts with the array. `RoundRobinQueueScheduler` tracks pids instead.
#[derive(Debug)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
    // None until the first quantum boundary
    pos: Option<usize>,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum, pos: None }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.pos
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "rr"
    }

    fn pick_next(&mut self, ctx: &TickCtx<'_>) -> Option<Pid> {
        if ctx.procs.is_empty() {
            return None;
        }

        let Some(current) = ctx.current else {
            return ctx.first_pid();
        };

        if !is_quantum_boundary(ctx.now, self.quantum) {
            return Some(current);
        }

        let mut pos = self.pos.map_or(0, |p| p + 1);
        if pos >= ctx.procs.len() {
            pos = 0;
        }
        self.pos = Some(pos);

        Some(ctx.procs[pos].pid)
    }
}
