use std::{
    collections::VecDeque,
    num::{NonZeroU32, NonZeroUsize},
};

use super::{round_robin::Arrivals, Process, Schedule, Scheduler, Ticks};

/// Multilevel feedback queue.
///
/// New processes enter the top level. A process that uses up its quantum drops
/// one level, where the quantum doubles; the bottom level behaves like round robin.
pub struct FeedbackScheduler {
    levels: NonZeroUsize,
    base_quantum: NonZeroU32,
}

impl FeedbackScheduler {
    pub const DEFAULT_LEVELS: usize = 3;
    /// Past this depth the quantum no longer fits in `Ticks`.
    pub const MAX_LEVELS: usize = Ticks::BITS as usize;

    pub fn new(levels: NonZeroUsize, base_quantum: NonZeroU32) -> Self {
        let max = NonZeroUsize::new(Self::MAX_LEVELS).unwrap_or(NonZeroUsize::MIN);
        Self {
            levels: levels.min(max),
            base_quantum,
        }
    }

    fn quantum(&self, level: usize) -> Ticks {
        let shift = u32::try_from(level).unwrap_or(u32::MAX);
        self.base_quantum
            .get()
            .checked_shl(shift)
            .filter(|&quantum| quantum >> shift == self.base_quantum.get())
            .unwrap_or(Ticks::MAX)
    }
}

impl Scheduler for FeedbackScheduler {
    const NAME: &'static str = "Feedback";

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(Self::NAME).with_note(format!(
            "Levels: {}, Base Quantum: {}",
            self.levels, self.base_quantum
        ));
        let mut remaining: Vec<Ticks> = processes.iter().map(Process::burst).collect();
        let mut arrivals = Arrivals::new(processes);
        let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); self.levels.get()];
        let lowest = self.levels.get() - 1;
        let mut clock: Ticks = 0;

        while schedule.completed() < processes.len() {
            arrivals.admit(processes, clock, &mut queues[0]);

            let Some((level, index)) = queues
                .iter_mut()
                .enumerate()
                .find_map(|(level, queue)| queue.pop_front().map(|index| (level, index)))
            else {
                let next = arrivals.upcoming(processes).map_or(clock + 1, |at| at.max(clock + 1));
                tracing::trace!(from = clock, to = next, "cpu idle");
                clock = next;
                continue;
            };

            let process = &processes[index];
            let slice = remaining[index].min(self.quantum(level));
            let start = clock;
            remaining[index] -= slice;
            clock += slice;
            schedule.run(process, start, clock);

            arrivals.admit(processes, clock, &mut queues[0]);

            if remaining[index] == 0 {
                schedule.complete(process, clock);
            } else {
                queues[(level + 1).min(lowest)].push_back(index);
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
        RoundRobinScheduler, Slice,
    };

    fn feedback(levels: usize, base_quantum: u32) -> FeedbackScheduler {
        FeedbackScheduler::new(
            NonZeroUsize::new(levels).unwrap(),
            NonZeroU32::new(base_quantum).unwrap(),
        )
    }

    #[test]
    fn quantum_doubles_per_level() {
        let scheduler = feedback(4, 3);
        assert_eq!(
            (0..4).map(|level| scheduler.quantum(level)).collect::<Vec<_>>(),
            vec![3, 6, 12, 24]
        );
        assert_eq!(scheduler.quantum(40), Ticks::MAX);
    }

    #[test]
    fn level_count_is_capped() {
        let processes = vec![Process::new(1, 0, 3)];
        let schedule = feedback(usize::MAX, 1).schedule(&processes);

        assert_invariants(&processes, &schedule);
        assert_eq!(schedule.note(), Some("Levels: 32, Base Quantum: 1"));
    }

    #[test]
    fn single_level_matches_round_robin() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
            Process::new(4, 3, 6),
        ];
        let feedback = feedback(1, 2).schedule(&processes);
        let round_robin =
            RoundRobinScheduler::new(NonZeroU32::new(2).unwrap()).schedule(&processes);

        assert_invariants(&processes, &feedback);
        assert_eq!(feedback.completions(), round_robin.completions());
        assert_eq!(feedback.timeline(), round_robin.timeline());
    }

    #[test]
    fn demoted_process_yields_to_newcomers() {
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 1, 1)];
        let schedule = feedback(3, 1).schedule(&processes);

        assert_invariants(&processes, &schedule);
        assert_eq!(timings(&schedule), vec![(2, 0, 1), (1, 1, 4)]);
        assert_eq!(
            schedule.timeline(),
            &[
                Slice { pid: 1, start: 0, end: 1 },
                Slice { pid: 2, start: 1, end: 2 },
                Slice { pid: 1, start: 2, end: 4 },
            ]
        );
    }

    #[test]
    fn bottom_level_round_robins() {
        let processes = vec![Process::new(1, 0, 6), Process::new(2, 0, 6)];
        let schedule = feedback(2, 1).schedule(&processes);

        // Level 0 gives each one unit, then level 1 alternates in slices of two
        assert_invariants(&processes, &schedule);
        assert_eq!(timings(&schedule), vec![(1, 5, 11), (2, 6, 12)]);
    }
}
