//! Plain text rendering of finished schedules.

use std::fmt;

use crate::scheduler::Schedule;

/// Per-process table with averages for one schedule.
pub struct ScheduleReport<'a>(pub &'a Schedule);

impl fmt::Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.0;

        writeln!(f, "=== {} Scheduling ===", schedule.name())?;
        if let Some(note) = schedule.note() {
            writeln!(f, "{note}")?;
        }
        writeln!(
            f,
            "{:<5} {:<12} {:<10} {:<10} {}",
            "PID", "Arrival", "Burst", "Waiting", "Turnaround"
        )?;
        for completion in schedule.completions() {
            writeln!(
                f,
                "{:<5} {:<12} {:<10} {:<10} {}",
                completion.pid,
                completion.arrival,
                completion.burst,
                completion.waiting,
                completion.turnaround
            )?;
        }

        let order = schedule
            .timeline()
            .iter()
            .map(|slice| format!("P{} [{}-{}]", slice.pid, slice.start, slice.end))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "Execution Order: {order}")?;

        match schedule.averages() {
            Ok(averages) => {
                writeln!(f, "Average Waiting Time: {:.2}", averages.waiting)?;
                writeln!(f, "Average Turnaround Time: {:.2}", averages.turnaround)
            }
            Err(err) => writeln!(f, "Averages unavailable: {err}"),
        }
    }
}

/// Side-by-side averages of several schedules over the same processes.
pub struct ComparisonReport<'a>(pub &'a [Schedule]);

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .0
            .iter()
            .map(|schedule| schedule.name().len())
            .max()
            .unwrap_or(0)
            .max("Algorithm".len());

        writeln!(f, "=== Comparison ===")?;
        writeln!(
            f,
            "{:<width$} {:<12} {}",
            "Algorithm", "Avg Waiting", "Avg Turnaround"
        )?;
        for schedule in self.0 {
            if let Ok(averages) = schedule.averages() {
                writeln!(
                    f,
                    "{:<width$} {:<12.2} {:.2}",
                    schedule.name(),
                    averages.waiting,
                    averages.turnaround
                )?;
            }
        }
        Ok(())
    }
}
