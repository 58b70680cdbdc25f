use super::{non_preemptive, Process, Schedule, Scheduler, Ticks};

/// Highest response ratio next, `(waited + burst) / burst`.
pub struct HrrnScheduler;

impl HrrnScheduler {
    // Cross-multiplied so equal ratios compare equal
    fn has_higher_ratio(candidate: &Process, best: &Process, clock: Ticks) -> bool {
        let ratio_numerator = |process: &Process| {
            u64::from(clock - process.arrival()) + u64::from(process.burst())
        };
        ratio_numerator(candidate) * u64::from(best.burst())
            > ratio_numerator(best) * u64::from(candidate.burst())
    }
}

impl Scheduler for HrrnScheduler {
    const NAME: &'static str = "HRRN";

    fn schedule(&self, processes: &[Process]) -> Schedule {
        non_preemptive::run_to_completion(Self::NAME, processes, HrrnScheduler::has_higher_ratio)
    }
}
