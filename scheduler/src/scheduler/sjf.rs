use super::{non_preemptive, Process, Schedule, Scheduler};

/// Non-preemptive shortest job first.
pub struct SjfScheduler;

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "SJF";

    fn schedule(&self, processes: &[Process]) -> Schedule {
        non_preemptive::run_to_completion(Self::NAME, processes, |candidate, best, _| {
            candidate.burst() < best.burst()
        })
    }
}
