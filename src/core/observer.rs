use super::{event::SchedCoreEvent, state::TickCtx};

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    switches: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, ctx: &TickCtx<'_>, event: SchedCoreEvent) {
        self.step += 1;

        match event {
            SchedCoreEvent::Keep { pid } => {
                debug_assert!(
                    ctx.is_active(pid),
                    "Kept pid {pid} is not in the snapshot at t={}",
                    ctx.now
                );
            }
            SchedCoreEvent::Switch { to, .. } => {
                self.switches += 1;
                debug_assert!(
                    ctx.is_active(to),
                    "Chosen pid {to} is not in the snapshot at t={}",
                    ctx.now
                );
            }
            SchedCoreEvent::Idle => {}
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn switches(&self) -> u64 {
        self.switches
    }
}
