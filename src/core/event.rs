use crate::core::Pid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedCoreEvent {
    // Running process keeps the CPU
    Keep {
        pid: Pid,
    },
    // Context switch; `from` is None when the CPU was idle
    Switch {
        from: Option<Pid>,
        to: Pid,
    },
    // Scheduler left the CPU idle
    Idle,
}

impl SchedCoreEvent {
    pub fn classify(current: Option<Pid>, next: Option<Pid>) -> Self {
        match (current, next) {
            (_, None) => Self::Idle,
            (Some(from), Some(to)) if from == to => Self::Keep { pid: to },
            (from, Some(to)) => Self::Switch { from, to },
        }
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, Self::Switch { .. })
    }
}
