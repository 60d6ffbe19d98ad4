use super::job::{Job, JobInstance};
use crate::{
    core::{
        driver::SchedCore,
        event::SchedCoreEvent,
        state::{Pid, ProcessSnapshot, ServiceTimes, Ticks},
    },
    scheduler::Scheduler,
};
use rustc_hash::FxHashMap;

/// Total run time per pid, answered from the job list.
#[derive(Debug, Default)]
pub struct JobTable(FxHashMap<Pid, Ticks>);

impl ServiceTimes for JobTable {
    fn total_time(&self, pid: Pid) -> Ticks {
        match self.0.get(&pid) {
            Some(&run_time) => run_time,
            None => {
                log::warn!("service time requested for unknown pid {pid}");
                0
            }
        }
    }
}

/// Minimal single-CPU collaborator: admits jobs, runs the chosen one for one
/// tick per step and retires it once its run time is used up.
pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
    jobs: Vec<JobInstance>,
    job_cursor: usize,
    // Indices into `jobs`, in arrival order
    active: Vec<usize>,
    service: JobTable,
    running: Option<Pid>,
    now: Ticks,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(mut jobs: Vec<Job>, scheduler: S) -> Self {
        jobs.sort_by(|a, b| {
            a.arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| a.id.cmp(&b.id))
        });
        debug_assert!(
            jobs.windows(2).all(|w| w[0].id != w[1].id),
            "Job ids must be unique"
        );
        let jobs = jobs.into_iter().map(JobInstance::new).collect();

        Self {
            core: SchedCore::new(scheduler),
            jobs,
            job_cursor: 0,
            active: Vec::new(),
            service: JobTable::default(),
            running: None,
            now: 0,
        }
    }

    pub fn step(&mut self) -> SchedCoreEvent {
        self.handle_arrivals();

        let procs: Vec<ProcessSnapshot> = self
            .active
            .iter()
            .map(|&i| ProcessSnapshot::new(self.jobs[i].job.id, self.jobs[i].executed_time))
            .collect();
        // A pid that finished last tick is gone; the policy sees an idle CPU
        let current = self
            .running
            .filter(|pid| procs.iter().any(|p| p.pid == *pid));

        let next = self.core.decide(&procs, self.now, current, &self.service);
        self.running = next;
        if let Some(pid) = next {
            self.run_for_tick(pid);
        }

        self.now += 1;
        SchedCoreEvent::classify(current, next)
    }

    fn handle_arrivals(&mut self) {
        while let Some(instance) = self.jobs.get_mut(self.job_cursor) {
            if instance.job.arrival_time > self.now {
                break; // Jobs are sorted, so nothing later has arrived either
            }

            if instance.is_finished() {
                instance.completion_time = Some(self.now);
            } else {
                self.service.0.insert(instance.job.id, instance.job.run_time);
                self.active.push(self.job_cursor);
            }
            self.job_cursor += 1;
        }
    }

    fn run_for_tick(&mut self, pid: Pid) {
        let Some(pos) = self.active.iter().position(|&i| self.jobs[i].job.id == pid) else {
            log::warn!("t={} scheduler chose inactive pid {pid}", self.now);
            self.running = None;
            return;
        };

        let now = self.now;
        let instance = &mut self.jobs[self.active[pos]];
        instance.start_time.get_or_insert(now);
        instance.executed_time += 1;

        if instance.is_finished() {
            instance.completion_time = Some(now + 1);
            self.active.remove(pos);
            self.running = None;
        }
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.jobs.iter().all(|job| job.completion_time.is_some())
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn jobs(&self) -> &[JobInstance] {
        &self.jobs
    }

    pub fn active_pids(&self) -> Vec<Pid> {
        self.active.iter().map(|&i| self.jobs[i].job.id).collect()
    }
}
