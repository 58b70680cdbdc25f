use super::{non_preemptive, Process, Schedule, Scheduler};

/// Non-preemptive priority scheduling; the lowest priority value runs first.
pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    const NAME: &'static str = "Priority";

    fn schedule(&self, processes: &[Process]) -> Schedule {
        non_preemptive::run_to_completion(Self::NAME, processes, |candidate, best, _| {
            candidate.priority() < best.priority()
        })
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;
    use test_log::test;

    use super::*;
    use crate::scheduler::tests::{assert_invariants, timings};

    #[test]
    fn lowest_value_runs_first() {
        let processes = vec![
            Process::with_priority(1, 0, 5, 2),
            Process::with_priority(2, 1, 3, 1),
            Process::with_priority(3, 2, 8, 4),
            Process::with_priority(4, 3, 6, 3),
        ];
        let schedule = PriorityScheduler.schedule(&processes);

        assert_invariants(&processes, &schedule);
        assert_eq!(
            timings(&schedule),
            vec![(1, 0, 5), (2, 4, 7), (4, 5, 11), (3, 12, 20)]
        );
    }

    #[test]
    fn negative_priorities_are_more_urgent() {
        let processes = vec![
            Process::with_priority(1, 0, 2, 0),
            Process::with_priority(2, 0, 2, 5),
            Process::with_priority(3, 0, 2, -3),
        ];
        let schedule = PriorityScheduler.schedule(&processes);

        let order: Vec<_> = schedule.completions().iter().map(|c| c.pid).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn equal_priorities_go_to_first_declared() {
        let processes = vec![
            Process::with_priority(1, 0, 4, 1),
            Process::with_priority(2, 0, 1, 1),
        ];
        let schedule = PriorityScheduler.schedule(&processes);

        assert_eq!(timings(&schedule), vec![(1, 0, 4), (2, 4, 5)]);
    }

    #[test]
    fn idles_until_first_arrival() {
        let processes = vec![Process::with_priority(1, 10, 4, 7)];
        let schedule = PriorityScheduler.schedule(&processes);

        assert_eq!(timings(&schedule), vec![(1, 0, 4)]);
    }
}
