use rustc_hash::FxHashSet;

pub type Pid = u32;
pub type Ticks = u64;

/// Read-only view of one active process at the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSnapshot {
    pub pid: Pid,
    // Time consumed so far, on CPU or on I/O
    pub executed_time: Ticks,
    pub on_io: bool,
}

impl ProcessSnapshot {
    pub fn new(pid: Pid, executed_time: Ticks) -> Self {
        Self {
            pid,
            executed_time,
            on_io: false,
        }
    }
}

/// Total service time lookup, owned by the simulator.
///
/// Preemptive policies call this for every active process on every tick, so
/// implementations should answer in constant time.
pub trait ServiceTimes {
    fn total_time(&self, pid: Pid) -> Ticks;
}

impl<F: Fn(Pid) -> Ticks> ServiceTimes for F {
    fn total_time(&self, pid: Pid) -> Ticks {
        self(pid)
    }
}

/// Everything a policy may look at during one decision call.
///
/// Borrows the snapshot, so nothing from it can outlive the call.
pub struct TickCtx<'a> {
    pub procs: &'a [ProcessSnapshot],
    pub now: Ticks,
    // None is the decision-open sentinel: nothing holds the CPU
    pub current: Option<Pid>,
    pub service: &'a dyn ServiceTimes,
}

impl<'a> TickCtx<'a> {
    pub fn new(
        procs: &'a [ProcessSnapshot],
        now: Ticks,
        current: Option<Pid>,
        service: &'a dyn ServiceTimes,
    ) -> Self {
        Self {
            procs,
            now,
            current,
            service,
        }
    }

    pub fn total_time(&self, pid: Pid) -> Ticks {
        self.service.total_time(pid)
    }

    /// Remaining service; negative if the simulator reports more executed
    /// time than the process ever needed.
    pub fn remaining_time(&self, snap: &ProcessSnapshot) -> i128 {
        i128::from(self.total_time(snap.pid)) - i128::from(snap.executed_time)
    }

    pub fn position(&self, pid: Pid) -> Option<usize> {
        self.procs.iter().position(|p| p.pid == pid)
    }

    pub fn is_active(&self, pid: Pid) -> bool {
        self.position(pid).is_some()
    }

    pub fn active_pids(&self) -> FxHashSet<Pid> {
        self.procs.iter().map(|p| p.pid).collect()
    }

    pub fn first_pid(&self) -> Option<Pid> {
        self.procs.first().map(|p| p.pid)
    }
}
