pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use crate::core::{
    Pid, ProcessSnapshot, SchedCore, SchedCoreEvent, ServiceTimes, TickCtx, Ticks,
};
pub use error::{SchedError, SchedResult};
pub use scheduler::{AnyScheduler, PolicyKind, SchedConfig, Scheduler, get_scheduler};
pub use sim::{Job, Sim};
