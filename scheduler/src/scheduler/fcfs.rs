use super::{process::arrival_order, Process, Schedule, Scheduler};

/// Runs processes in arrival order, each to completion.
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    const NAME: &'static str = "FCFS";

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(Self::NAME);
        let mut clock = 0;

        for index in arrival_order(processes) {
            let process = &processes[index];
            let start = clock.max(process.arrival());
            clock = start + process.burst();
            schedule.run(process, start, clock);
            schedule.complete(process, clock);
        }

        schedule
    }
}
