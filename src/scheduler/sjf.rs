use super::{Pid, Scheduler, TickCtx};

/// Shortest job first, non-preemptive.
///
/// Only an idle CPU triggers a decision; whoever is running keeps the CPU
/// until the simulator reports it gone.
#[derive(Debug, Default)]
pub struct SjfScheduler;

impl Scheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "sjf"
    }

    fn pick_next(&mut self, ctx: &TickCtx<'_>) -> Option<Pid> {
        if ctx.procs.is_empty() {
            return None;
        }

        if let Some(pid) = ctx.current {
            return Some(pid);
        }

        // min_by_key keeps the first of equal keys
        ctx.procs
            .iter()
            .min_by_key(|p| ctx.total_time(p.pid))
            .map(|p| p.pid)
    }
}
