use std::{collections::VecDeque, num::NonZeroU32};

use super::{process::arrival_order, Process, Schedule, Scheduler, Ticks};

/// Preemptive round robin with a fixed time quantum.
///
/// Processes that arrive while a slice runs are queued ahead of the process that
/// slice preempted.
pub struct RoundRobinScheduler {
    quantum: NonZeroU32,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU32) -> Self {
        Self { quantum }
    }
}

/// Feeds processes into a ready queue as the clock passes their arrival.
pub(super) struct Arrivals {
    order: Vec<usize>,
    next: usize,
}

impl Arrivals {
    pub(super) fn new(processes: &[Process]) -> Self {
        Self {
            order: arrival_order(processes),
            next: 0,
        }
    }

    pub(super) fn admit(&mut self, processes: &[Process], clock: Ticks, queue: &mut VecDeque<usize>) {
        while let Some(&index) = self.order.get(self.next) {
            if !processes[index].is_eligible(clock) {
                break;
            }
            queue.push_back(index);
            self.next += 1;
        }
    }

    /// Arrival time of the next process not yet admitted.
    pub(super) fn upcoming(&self, processes: &[Process]) -> Option<Ticks> {
        self.order
            .get(self.next)
            .map(|&index| processes[index].arrival())
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin";

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule =
            Schedule::new(Self::NAME).with_note(format!("Time Quantum: {}", self.quantum));
        let mut remaining: Vec<Ticks> = processes.iter().map(Process::burst).collect();
        let mut arrivals = Arrivals::new(processes);
        let mut ready = VecDeque::new();
        let mut clock: Ticks = 0;

        while schedule.completed() < processes.len() {
            arrivals.admit(processes, clock, &mut ready);

            let Some(index) = ready.pop_front() else {
                let next = arrivals.upcoming(processes).map_or(clock + 1, |at| at.max(clock + 1));
                tracing::trace!(from = clock, to = next, "cpu idle");
                clock = next;
                continue;
            };

            let process = &processes[index];
            let slice = remaining[index].min(self.quantum.get());
            let start = clock;
            remaining[index] -= slice;
            clock += slice;
            schedule.run(process, start, clock);

            // Newcomers queue up before the preempted process
            arrivals.admit(processes, clock, &mut ready);

            if remaining[index] == 0 {
                schedule.complete(process, clock);
            } else {
                ready.push_back(index);
            }
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;
    use test_log::test;

    use super::*;
    use crate::scheduler::{
        tests::{assert_invariants, timings},
        FcfsScheduler, Slice,
    };

    fn quantum(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn interleaves_with_quantum_two() {
        let processes = vec![
            Process::new(1, 0, 4),
            Process::new(2, 1, 3),
            Process::new(3, 2, 5),
        ];
        let schedule = RoundRobinScheduler::new(quantum(2)).schedule(&processes);

        assert_invariants(&processes, &schedule);
        assert_eq!(timings(&schedule), vec![(1, 4, 8), (2, 5, 8), (3, 5, 10)]);
        assert_eq!(
            schedule.timeline(),
            &[
                Slice { pid: 1, start: 0, end: 2 },
                Slice { pid: 2, start: 2, end: 4 },
                Slice { pid: 3, start: 4, end: 6 },
                Slice { pid: 1, start: 6, end: 8 },
                Slice { pid: 2, start: 8, end: 9 },
                Slice { pid: 3, start: 9, end: 12 },
            ]
        );
    }

    #[test]
    fn arrival_at_preemption_queues_ahead() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 2, 2)];
        let schedule = RoundRobinScheduler::new(quantum(2)).schedule(&processes);

        // P2 shows up exactly when P1 is preempted and runs first
        assert_invariants(&processes, &schedule);
        assert_eq!(timings(&schedule), vec![(2, 0, 2), (1, 2, 6)]);
    }

    #[test]
    fn large_quantum_matches_fcfs() {
        let processes = vec![
            Process::new(1, 3, 4),
            Process::new(2, 0, 6),
            Process::new(3, 3, 2),
            Process::new(4, 20, 1),
        ];
        let round_robin = RoundRobinScheduler::new(quantum(6)).schedule(&processes);
        let fcfs = FcfsScheduler.schedule(&processes);

        assert_eq!(round_robin.completions(), fcfs.completions());
        assert_eq!(round_robin.timeline(), fcfs.timeline());
    }

    #[test]
    fn idles_between_arrivals() {
        let processes = vec![Process::new(1, 0, 1), Process::new(2, 5, 3)];
        let schedule = RoundRobinScheduler::new(quantum(1)).schedule(&processes);

        assert_eq!(timings(&schedule), vec![(1, 0, 1), (2, 0, 3)]);
        assert_eq!(
            schedule.timeline(),
            &[
                Slice { pid: 1, start: 0, end: 1 },
                Slice { pid: 2, start: 5, end: 8 },
            ]
        );
    }

    #[test]
    fn reuse_does_not_leak_remaining_time() {
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 3)];
        let scheduler = RoundRobinScheduler::new(quantum(1));

        assert_eq!(scheduler.schedule(&processes), scheduler.schedule(&processes));
        assert_eq!(processes[0].burst(), 3);
    }

    #[test]
    fn quantum_is_noted_apart_from_name() {
        let schedule = RoundRobinScheduler::new(quantum(3)).schedule(&[Process::new(1, 0, 1)]);
        assert_eq!(schedule.name(), "Round Robin");
        assert_eq!(schedule.note(), Some("Time Quantum: 3"));
    }
}
