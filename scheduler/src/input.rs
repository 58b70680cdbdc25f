//! Reads the process set, algorithm choice and quantum, validating them before
//! anything is simulated.

use std::{
    collections::VecDeque,
    fs,
    io::{self, BufRead, Write},
    num::NonZeroU32,
    path::Path,
    str::FromStr,
};

use serde::Deserialize;

use crate::scheduler::{Algorithm, Pid, Process, Ticks};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] io::Error),
    #[error("input ended while reading {0}")]
    UnexpectedEof(String),
    #[error("expected {what}, got {value:?}")]
    Malformed { what: String, value: String },
    #[error("at least one process is required")]
    NoProcesses,
    #[error("process {pid} has a burst time of 0")]
    ZeroBurst { pid: Pid },
    #[error("invalid algorithm choice {0:?}")]
    InvalidChoice(String),
    #[error("time quantum must be positive")]
    ZeroQuantum,
    #[error("processes would run past the largest representable time ({})", Ticks::MAX)]
    TimeOverflow,
    #[error("malformed workload file")]
    Workload(#[from] serde_json::Error),
}

/// Console dialogue reading whitespace separated values from `reader`.
pub struct Prompt<R, W> {
    reader: R,
    out: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, what: &str) -> Result<String, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof(what.to_owned()));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        self.pending
            .pop_front()
            .ok_or_else(|| InputError::UnexpectedEof(what.to_owned()))
    }

    fn ask<T: FromStr>(&mut self, prompt: &str, what: &str) -> Result<T, InputError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let token = self.next_token(what)?;
        token.parse().map_err(|_| InputError::Malformed {
            what: what.to_owned(),
            value: token,
        })
    }

    pub fn read_processes(&mut self) -> Result<Vec<Process>, InputError> {
        let count: usize = self.ask("Enter number of processes: ", "a process count")?;

        let mut specs = Vec::new();
        for number in 1..=count {
            writeln!(self.out, "Process {number}")?;
            let arrival: Ticks = self.ask("Arrival Time: ", "an arrival time")?;
            let burst: Ticks = self.ask("Burst Time: ", "a burst time")?;
            let priority: i32 =
                self.ask("Priority (Lower is higher priority): ", "a priority")?;
            specs.push(ProcessSpec {
                arrival,
                burst,
                priority,
            });
        }

        into_processes(specs)
    }

    pub fn read_algorithm(&mut self) -> Result<Algorithm, InputError> {
        writeln!(self.out, "\nChoose Scheduling Algorithm:")?;
        for (number, algorithm) in Algorithm::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", number + 1, algorithm.name())?;
        }
        self.out.flush()?;

        let token = self.next_token("an algorithm choice")?;
        token
            .parse()
            .ok()
            .and_then(Algorithm::from_menu_choice)
            .ok_or(InputError::InvalidChoice(token))
    }

    pub fn read_quantum(&mut self) -> Result<NonZeroU32, InputError> {
        let quantum: u32 = self.ask("Enter Time Quantum: ", "a time quantum")?;
        NonZeroU32::new(quantum).ok_or(InputError::ZeroQuantum)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProcessSpec {
    arrival: Ticks,
    burst: Ticks,
    #[serde(default)]
    priority: i32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Workload {
    processes: Vec<ProcessSpec>,
}

/// Parses `{"processes": [{"arrival": 0, "burst": 5, "priority": 2}, ...]}`.
pub fn parse_workload(json: &str) -> Result<Vec<Process>, InputError> {
    let workload: Workload = serde_json::from_str(json)?;
    into_processes(workload.processes)
}

pub fn load_workload(path: &Path) -> Result<Vec<Process>, InputError> {
    parse_workload(&fs::read_to_string(path)?)
}

// Pids follow declaration order, starting at 1
fn into_processes(specs: Vec<ProcessSpec>) -> Result<Vec<Process>, InputError> {
    if specs.is_empty() {
        return Err(InputError::NoProcesses);
    }

    // The clock never passes the last arrival plus all CPU work
    let latest_arrival = specs.iter().map(|spec| spec.arrival).max().unwrap_or(0);
    specs
        .iter()
        .try_fold(latest_arrival, |horizon, spec| horizon.checked_add(spec.burst))
        .ok_or(InputError::TimeOverflow)?;

    (1..)
        .zip(specs)
        .map(|(pid, spec)| {
            if spec.burst == 0 {
                return Err(InputError::ZeroBurst { pid });
            }
            Ok(Process::with_priority(
                pid,
                spec.arrival,
                spec.burst,
                spec.priority,
            ))
        })
        .collect()
}
