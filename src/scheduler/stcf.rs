use super::{Pid, Scheduler, TickCtx};

/// Shortest time to completion first. Re-evaluated on every tick, so a
/// process with less work left preempts the running one immediately.
#[derive(Debug, Default)]
pub struct StcfScheduler;

impl Scheduler for StcfScheduler {
    fn name(&self) -> &'static str {
        "stcf"
    }

    fn pick_next(&mut self, ctx: &TickCtx<'_>) -> Option<Pid> {
        ctx.procs
            .iter()
            .min_by_key(|p| ctx.remaining_time(p))
            .map(|p| p.pid)
    }
}
