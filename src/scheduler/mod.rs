pub mod fifo;
pub mod rr;
pub mod rrq;
pub mod sjf;
pub mod stcf;

use std::{fmt, num::NonZeroU64, str::FromStr};

use crate::{
    core::state::{Pid, TickCtx, Ticks},
    error::{SchedError, SchedResult},
};
pub use fifo::FifoScheduler;
pub use rr::RoundRobinScheduler;
pub use rrq::RoundRobinQueueScheduler;
pub use sjf::SjfScheduler;
pub use stcf::StcfScheduler;

pub const QUANTUM_DFL: NonZeroU64 = NonZeroU64::new(50).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedConfig {
    pub quantum: NonZeroU64,
}

impl Default for SchedConfig {
    fn default() -> Self {
        Self {
            quantum: QUANTUM_DFL,
        }
    }
}

impl SchedConfig {
    pub fn with_quantum(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }
}

/// True when `now` falls on a slice boundary and a round-robin policy should
/// reconsider its choice.
pub fn is_quantum_boundary(now: Ticks, quantum: NonZeroU64) -> bool {
    now % quantum.get() == 0
}

pub trait Scheduler {
    fn name(&self) -> &'static str;

    /// Choose the pid that holds the CPU this tick.
    ///
    /// Returning `ctx.current` means no context switch; `None` leaves the CPU
    /// idle. Only called with the snapshot for the current tick.
    fn pick_next(&mut self, ctx: &TickCtx<'_>) -> Option<Pid>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Sjf,
    Stcf,
    RoundRobin,
    RoundRobinQueue,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Sjf,
        PolicyKind::Stcf,
        PolicyKind::RoundRobin,
        PolicyKind::RoundRobinQueue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Sjf => "sjf",
            PolicyKind::Stcf => "stcf",
            PolicyKind::RoundRobin => "rr",
            PolicyKind::RoundRobinQueue => "rrq",
        }
    }

    // Fresh state every time; no two runs share a cursor or queue
    pub fn build(self, config: &SchedConfig) -> AnyScheduler {
        match self {
            PolicyKind::Fifo => AnyScheduler::Fifo(FifoScheduler),
            PolicyKind::Sjf => AnyScheduler::Sjf(SjfScheduler),
            PolicyKind::Stcf => AnyScheduler::Stcf(StcfScheduler),
            PolicyKind::RoundRobin => {
                AnyScheduler::RoundRobin(RoundRobinScheduler::new(config.quantum))
            }
            PolicyKind::RoundRobinQueue => {
                AnyScheduler::RoundRobinQueue(RoundRobinQueueScheduler::new(config.quantum))
            }
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = SchedError;

    fn from_str(name: &str) -> SchedResult<Self> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| SchedError::unknown_policy(name))
    }
}

/// One of the built-in policies, chosen at configuration time.
#[derive(Debug)]
pub enum AnyScheduler {
    Fifo(FifoScheduler),
    Sjf(SjfScheduler),
    Stcf(StcfScheduler),
    RoundRobin(RoundRobinScheduler),
    RoundRobinQueue(RoundRobinQueueScheduler),
}

impl AnyScheduler {
    pub fn kind(&self) -> PolicyKind {
        match self {
            AnyScheduler::Fifo(_) => PolicyKind::Fifo,
            AnyScheduler::Sjf(_) => PolicyKind::Sjf,
            AnyScheduler::Stcf(_) => PolicyKind::Stcf,
            AnyScheduler::RoundRobin(_) => PolicyKind::RoundRobin,
            AnyScheduler::RoundRobinQueue(_) => PolicyKind::RoundRobinQueue,
        }
    }
}

impl Scheduler for AnyScheduler {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn pick_next(&mut self, ctx: &TickCtx<'_>) -> Option<Pid> {
        match self {
            AnyScheduler::Fifo(s) => s.pick_next(ctx),
            AnyScheduler::Sjf(s) => s.pick_next(ctx),
            AnyScheduler::Stcf(s) => s.pick_next(ctx),
            AnyScheduler::RoundRobin(s) => s.pick_next(ctx),
            AnyScheduler::RoundRobinQueue(s) => s.pick_next(ctx),
        }
    }
}

/// Resolve a policy name to a freshly initialised scheduler.
pub fn get_scheduler(name: &str, config: &SchedConfig) -> SchedResult<AnyScheduler> {
    let kind: PolicyKind = name.parse()?;
    log::debug!("selected scheduler '{kind}' (quantum={})", config.quantum);
    Ok(kind.build(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_name() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.name().parse::<PolicyKind>(), Ok(kind));
            let sched = get_scheduler(kind.name(), &SchedConfig::default()).unwrap();
            assert_eq!(sched.kind(), kind);
            assert_eq!(sched.name(), kind.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected_with_the_name() {
        let err = get_scheduler("mlfq", &SchedConfig::default()).unwrap_err();
        assert_eq!(err, SchedError::UnknownPolicy("mlfq".into()));
        assert!(err.to_string().contains("'mlfq'"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("FIFO".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn quantum_boundaries() {
        let q = NonZeroU64::new(50).unwrap();
        assert!(is_quantum_boundary(0, q));
        assert!(is_quantum_boundary(150, q));
        assert!(!is_quantum_boundary(149, q));
    }
}
