use anyhow::{Context, Result};
use clap::Parser;
use cpu_scheduling_sim::{
    config::Cli,
    input::{self, Prompt},
    logging,
    report::{ComparisonReport, ScheduleReport},
    scheduler::{Algorithm, Schedule, ScheduleRunner},
};
use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let schedules = {
        let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());

        let processes = match &cli.workload {
            Some(path) => input::load_workload(path)
                .with_context(|| format!("failed to load workload {}", path.display()))?,
            None => prompt.read_processes().context("failed to read processes")?,
        };

        let algorithms = match cli.algorithm {
            _ if cli.compare => Algorithm::ALL.to_vec(),
            Some(algorithm) => vec![algorithm],
            None => vec![prompt.read_algorithm()?],
        };

        let quantum = match cli.quantum {
            None if algorithms.iter().any(|algorithm| algorithm.needs_quantum()) => {
                Some(prompt.read_quantum()?)
            }
            quantum => quantum,
        };
        let params = cli.params(quantum);

        algorithms
            .iter()
            .map(|algorithm| algorithm.schedule(&processes, &params))
            .collect::<Result<Vec<_>, _>>()?
    };

    if cli.tui {
        browse(schedules).context("terminal UI failed")?;
    } else {
        print(&schedules, cli.compare);
    }

    Ok(())
}

fn print(schedules: &[Schedule], compare: bool) {
    for schedule in schedules {
        println!("\n{}", ScheduleReport(schedule));
    }
    if compare {
        println!("\n{}", ComparisonReport(schedules));
    }
}

fn browse(schedules: Vec<Schedule>) -> Result<(), io::Error> {
    execute!(io::stdout(), Clear(ClearType::All))?;

    let mut runner = ScheduleRunner::new(schedules)?;
    while runner.run()? {}
    drop(runner);

    execute!(io::stdout(), Clear(ClearType::All))?;
    Ok(())
}
