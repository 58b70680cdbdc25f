use super::{Pid, Process, SchedulingError, Ticks};

/// Timing of one finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub waiting: Ticks,
    pub turnaround: Ticks,
}

impl Completion {
    fn new(process: &Process, finished_at: Ticks) -> Self {
        let turnaround = finished_at - process.arrival();
        Self {
            pid: process.pid(),
            arrival: process.arrival(),
            burst: process.burst(),
            waiting: turnaround - process.burst(),
            turnaround,
        }
    }

    pub fn finished_at(&self) -> Ticks {
        self.arrival + self.turnaround
    }
}

/// A contiguous stretch of CPU time given to one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub pid: Pid,
    pub start: Ticks,
    pub end: Ticks,
}

impl Slice {
    pub fn len(&self) -> Ticks {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub waiting: f64,
    pub turnaround: f64,
}

/// Outcome of one algorithm run: completions in the order processes finished,
/// plus every slice of CPU time in the order it was handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    name: String,
    note: Option<String>,
    completions: Vec<Completion>,
    timeline: Vec<Slice>,
}

impl Schedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            note: None,
            completions: Vec::new(),
            timeline: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters the run depended on, such as the time quantum.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub(super) fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    pub fn timeline(&self) -> &[Slice] {
        &self.timeline
    }

    pub fn completed(&self) -> usize {
        self.completions.len()
    }

    pub(super) fn run(&mut self, process: &Process, start: Ticks, end: Ticks) {
        tracing::debug!(
            scheduler = %self.name,
            pid = process.pid(),
            start,
            end,
            "dispatched"
        );

        // Back-to-back slices of the same process are one stretch of CPU time
        match self.timeline.last_mut() {
            Some(last) if last.pid == process.pid() && last.end == start => last.end = end,
            _ => self.timeline.push(Slice {
                pid: process.pid(),
                start,
                end,
            }),
        }
    }

    pub(super) fn complete(&mut self, process: &Process, finished_at: Ticks) {
        let completion = Completion::new(process, finished_at);
        tracing::debug!(
            scheduler = %self.name,
            pid = completion.pid,
            waiting = completion.waiting,
            turnaround = completion.turnaround,
            "completed"
        );
        self.completions.push(completion);
    }

    /// Mean waiting and turnaround time over every completed process.
    pub fn averages(&self) -> Result<Averages, SchedulingError> {
        if self.completions.is_empty() {
            return Err(SchedulingError::EmptySchedule);
        }

        let count = self.completions.len() as f64;
        let (waiting, turnaround) = self
            .completions
            .iter()
            .fold((0.0, 0.0), |(waiting, turnaround), completion| {
                (
                    waiting + f64::from(completion.waiting),
                    turnaround + f64::from(completion.turnaround),
                )
            });

        Ok(Averages {
            waiting: waiting / count,
            turnaround: turnaround / count,
        })
    }
}
