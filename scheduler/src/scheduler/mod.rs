mod display;
mod fcfs;
mod feedback;
mod hrrn;
mod non_preemptive;
mod priority;
mod process;
mod round_robin;
mod runner;
mod schedule;
mod sjf;
mod srt;

use std::num::{NonZeroU32, NonZeroUsize};

pub use fcfs::FcfsScheduler;
pub use feedback::FeedbackScheduler;
pub use hrrn::HrrnScheduler;
pub use priority::PriorityScheduler;
pub use process::{Pid, Process, Ticks};
pub use round_robin::RoundRobinScheduler;
pub use runner::ScheduleRunner;
pub use schedule::{Averages, Completion, Schedule, Slice};
pub use sjf::SjfScheduler;
pub use srt::SrtScheduler;

/// A scheduling discipline simulated over a fixed set of processes.
///
/// Implementations only borrow the processes; any per-run state such as
/// remaining burst time lives inside `schedule`.
pub trait Scheduler {
    const NAME: &'static str;

    fn schedule(&self, processes: &[Process]) -> Schedule;
}

#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("{0} scheduling needs a time quantum")]
    MissingQuantum(&'static str),
    #[error("no processes were scheduled")]
    EmptySchedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
    Srt,
    Hrrn,
    Feedback,
}

#[derive(Debug, Clone, Copy)]
pub struct SchedulingParams {
    pub quantum: Option<NonZeroU32>,
    pub feedback_levels: NonZeroUsize,
}

impl Default for SchedulingParams {
    fn default() -> Self {
        Self {
            quantum: None,
            feedback_levels: NonZeroUsize::new(FeedbackScheduler::DEFAULT_LEVELS)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Algorithm {
    /// Menu order used by the interactive prompt, numbered from 1.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
        Algorithm::Srt,
        Algorithm::Hrrn,
        Algorithm::Feedback,
    ];

    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Algorithm::ALL.get(index))
            .copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => FcfsScheduler::NAME,
            Algorithm::Sjf => SjfScheduler::NAME,
            Algorithm::Priority => PriorityScheduler::NAME,
            Algorithm::RoundRobin => RoundRobinScheduler::NAME,
            Algorithm::Srt => SrtScheduler::NAME,
            Algorithm::Hrrn => HrrnScheduler::NAME,
            Algorithm::Feedback => FeedbackScheduler::NAME,
        }
    }

    pub fn needs_quantum(self) -> bool {
        matches!(self, Algorithm::RoundRobin | Algorithm::Feedback)
    }

    pub fn schedule(
        self,
        processes: &[Process],
        params: &SchedulingParams,
    ) -> Result<Schedule, SchedulingError> {
        let quantum = || params.quantum.ok_or(SchedulingError::MissingQuantum(self.name()));

        let schedule = match self {
            Algorithm::Fcfs => run(&FcfsScheduler, processes),
            Algorithm::Sjf => run(&SjfScheduler, processes),
            Algorithm::Priority => run(&PriorityScheduler, processes),
            Algorithm::RoundRobin => run(&RoundRobinScheduler::new(quantum()?), processes),
            Algorithm::Srt => run(&SrtScheduler, processes),
            Algorithm::Hrrn => run(&HrrnScheduler, processes),
            Algorithm::Feedback => run(
                &FeedbackScheduler::new(params.feedback_levels, quantum()?),
                processes,
            ),
        };
        Ok(schedule)
    }
}

fn run<S: Scheduler>(scheduler: &S, processes: &[Process]) -> Schedule {
    tracing::info!(scheduler = S::NAME, processes = processes.len(), "simulating");
    let schedule = scheduler.schedule(processes);
    tracing::info!(
        scheduler = S::NAME,
        finished_at = schedule.timeline().last().map_or(0, |slice| slice.end),
        "simulation finished"
    );
    schedule
}
