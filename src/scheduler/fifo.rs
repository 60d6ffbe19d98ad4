use super::{Pid, Scheduler, TickCtx};

/// First come, first served. The simulator lists processes by arrival, so the
/// head of the snapshot is always the oldest.
#[derive(Debug, Default)]
pub struct FifoScheduler;

impl Scheduler for FifoScheduler {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn pick_next(&mut self, ctx: &TickCtx<'_>) -> Option<Pid> {
        ctx.first_pid()
    }
}
