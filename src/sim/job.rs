use crate::core::state::{Pid, Ticks};

#[derive(Debug, Clone)]
pub struct Job {
    pub id: Pid,
    pub arrival_time: Ticks,
    pub run_time: Ticks,
}

#[derive(Debug, Clone)]
pub struct JobInstance {
    pub job: Job,
    pub executed_time: Ticks,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

impl JobInstance {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            executed_time: 0,
            start_time: None,
            completion_time: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.executed_time >= self.job.run_time
    }
}
