use super::{Process, Schedule, Ticks};

/// Runs processes to completion one at a time.
///
/// At every decision point the eligible processes are scanned in input order and
/// `prefers(candidate, best, clock)` decides whether `candidate` replaces the best
/// one seen so far. Only a strict preference replaces it, so ties go to whichever
/// process was declared first.
pub(super) fn run_to_completion<F>(name: &str, processes: &[Process], prefers: F) -> Schedule
where
    F: Fn(&Process, &Process, Ticks) -> bool,
{
    let mut schedule = Schedule::new(name);
    let mut completed = vec![false; processes.len()];
    let mut clock: Ticks = 0;

    while schedule.completed() < processes.len() {
        let mut best: Option<usize> = None;
        for (index, process) in processes.iter().enumerate() {
            if completed[index] || !process.is_eligible(clock) {
                continue;
            }
            match best {
                Some(current) if !prefers(process, &processes[current], clock) => {}
                _ => best = Some(index),
            }
        }

        let Some(index) = best else {
            clock = next_arrival(processes, &completed, clock);
            continue;
        };

        let process = &processes[index];
        let start = clock;
        clock += process.burst();
        schedule.run(process, start, clock);
        schedule.complete(process, clock);
        completed[index] = true;
    }

    schedule
}

/// Jumps the clock over an idle stretch to the earliest outstanding arrival.
pub(super) fn next_arrival(processes: &[Process], completed: &[bool], clock: Ticks) -> Ticks {
    let next = processes
        .iter()
        .zip(completed)
        .filter(|(_, &done)| !done)
        .map(|(process, _)| process.arrival())
        .min()
        .map_or(clock + 1, |arrival| arrival.max(clock + 1));
    tracing::trace!(from = clock, to = next, "cpu idle");
    next
}
