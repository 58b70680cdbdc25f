use super::{non_preemptive::next_arrival, Process, Schedule, Scheduler, Ticks};

/// Preemptive shortest remaining time, re-evaluated every time unit.
pub struct SrtScheduler;

impl Scheduler for SrtScheduler {
    const NAME: &'static str = "SRT";

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(Self::NAME);
        let mut remaining: Vec<Ticks> = processes.iter().map(Process::burst).collect();
        let mut completed = vec![false; processes.len()];
        let mut clock: Ticks = 0;

        while schedule.completed() < processes.len() {
            let mut shortest: Option<usize> = None;
            for (index, process) in processes.iter().enumerate() {
                if completed[index] || !process.is_eligible(clock) {
                    continue;
                }
                match shortest {
                    Some(current) if remaining[index] >= remaining[current] => {}
                    _ => shortest = Some(index),
                }
            }

            let Some(index) = shortest else {
                clock = next_arrival(processes, &completed, clock);
                continue;
            };

            let process = &processes[index];
            remaining[index] -= 1;
            clock += 1;
            schedule.run(process, clock - 1, clock);

            if remaining[index] == 0 {
                completed[index] = true;
                schedule.complete(process, clock);
            }
        }

        schedule
    }
}
