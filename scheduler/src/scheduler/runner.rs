use std::io;

use super::{display::DisplayTerminal, Schedule};

pub enum RunnerEvent {
    Quit,
    Next,
    Previous,
    None,
}

/// Lets the user flip through finished schedules in the terminal.
pub struct ScheduleRunner {
    terminal: DisplayTerminal,
    schedules: Vec<Schedule>,
    selected: usize,
}

impl ScheduleRunner {
    pub fn new(schedules: Vec<Schedule>) -> io::Result<Self> {
        let terminal = DisplayTerminal::new()?;

        Ok(Self {
            terminal,
            schedules,
            selected: 0,
        })
    }

    // Returns false if the program should quit
    pub fn run(&mut self) -> io::Result<bool> {
        let Some(schedule) = self.schedules.get(self.selected) else {
            return Ok(false);
        };
        self.terminal
            .draw(schedule, self.selected, self.schedules.len())?;

        match self.terminal.get_input() {
            RunnerEvent::Quit => return Ok(false),
            RunnerEvent::Next => self.selected = (self.selected + 1) % self.schedules.len(),
            RunnerEvent::Previous => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(self.schedules.len() - 1)
            }
            RunnerEvent::None => {}
        }
        Ok(true)
    }
}
