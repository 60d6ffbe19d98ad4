use std::num::NonZeroU64;

use anyhow::Result;
use clap::Parser;
use rand::prelude::*;
use tick_sched::{Job, Pid, SchedConfig, Sim, Ticks, get_scheduler, scheduler::QUANTUM_DFL};

/// Run a random workload through one scheduling policy and print every
/// decision.
#[derive(Debug, Parser)]
#[command(name = "tick_sched")]
struct Args {
    /// Policy to run: fifo, sjf, stcf, rr or rrq
    #[arg(long, default_value = "fifo")]
    policy: String,

    /// Time slice for rr and rrq
    #[arg(long, default_value_t = QUANTUM_DFL)]
    quantum: NonZeroU64,

    /// Ticks during which jobs may arrive
    #[arg(long, default_value_t = 200)]
    ticks: Ticks,

    #[arg(long, default_value_t = 0.05)]
    p_arrival: f64,

    #[arg(long, default_value_t = 0.3)]
    p_short: f64,

    #[arg(long, default_value_t = 20)]
    short_ticks: Ticks,

    #[arg(long, default_value_t = 120)]
    long_ticks: Ticks,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Unknown policy names are a configuration bug: bail out before running
    let scheduler = get_scheduler(&args.policy, &SchedConfig::with_quantum(args.quantum))?;

    let jobs = bernoulli_jobs(&args);
    log::info!(
        "running {} jobs under '{}' (quantum={})",
        jobs.len(),
        args.policy,
        args.quantum
    );
    let mut sim = Sim::new(jobs, scheduler);

    while !sim.all_jobs_completed() {
        let now = sim.now();
        let event = sim.step();
        println!("t={} {:?}", now, event);
    }

    for job in sim.jobs() {
        if let Some(done) = job.completion_time {
            println!("job {} completed at {}", job.job.id, done);
        }
    }

    Ok(())
}

fn bernoulli_jobs(args: &Args) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut jobs = Vec::new();

    for t in 0..args.ticks {
        if rng.random::<f64>() < args.p_arrival {
            let run_time = if rng.random::<f64>() < args.p_short {
                args.short_ticks
            } else {
                args.long_ticks
            };

            jobs.push(Job {
                id: jobs.len() as Pid,
                arrival_time: t,
                run_time,
            });
        }
    }

    jobs
}
