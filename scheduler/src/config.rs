use std::{
    num::{NonZeroU32, NonZeroUsize},
    path::PathBuf,
};

use clap::Parser;

use crate::scheduler::{Algorithm, FeedbackScheduler, SchedulingParams};

/// Simulates classic CPU scheduling algorithms over a fixed set of processes
#[derive(Debug, Parser)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Algorithm to simulate; asked for interactively when omitted
    #[arg(short, long, value_enum, conflicts_with = "compare")]
    pub algorithm: Option<Algorithm>,

    /// Time quantum for round robin and the top feedback level
    #[arg(short, long)]
    pub quantum: Option<NonZeroU32>,

    /// Number of feedback queue levels
    #[arg(
        long,
        default_value_t = FeedbackScheduler::DEFAULT_LEVELS as u8,
        value_parser = clap::value_parser!(u8).range(1..=FeedbackScheduler::MAX_LEVELS as i64),
    )]
    pub feedback_levels: u8,

    /// JSON workload file; processes are asked for interactively when omitted
    #[arg(short, long)]
    pub workload: Option<PathBuf>,

    /// Run every algorithm on the same processes and compare averages
    #[arg(long)]
    pub compare: bool,

    /// Browse the results in a terminal UI instead of printing them
    #[arg(long)]
    pub tui: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn params(&self, quantum: Option<NonZeroU32>) -> SchedulingParams {
        SchedulingParams {
            quantum,
            feedback_levels: NonZeroUsize::new(usize::from(self.feedback_levels))
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}
