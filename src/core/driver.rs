use super::{
    event::SchedCoreEvent,
    observer::Observer,
    state::{Pid, ProcessSnapshot, ServiceTimes, TickCtx, Ticks},
};
use crate::scheduler::Scheduler;

/// Calls the selected policy once per tick and classifies the outcome.
pub struct SchedCore<S: Scheduler> {
    pub scheduler: S,
    observer: Observer,
    last_event: Option<SchedCoreEvent>,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            observer: Observer::new(),
            last_event: None,
        }
    }

    pub fn decide(
        &mut self,
        procs: &[ProcessSnapshot],
        now: Ticks,
        current: Option<Pid>,
        service: &dyn ServiceTimes,
    ) -> Option<Pid> {
        let ctx = TickCtx::new(procs, now, current, service);
        let next = self.scheduler.pick_next(&ctx);

        let event = SchedCoreEvent::classify(current, next);
        log::trace!(
            "t={now} {}: {event:?} ({} active)",
            self.scheduler.name(),
            procs.len()
        );
        self.observer.observe(&ctx, event);
        self.last_event = Some(event);

        next
    }

    pub fn last_event(&self) -> Option<SchedCoreEvent> {
        self.last_event
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
