use super::{runner::RunnerEvent, Schedule};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
    Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

const TICK_RATE: Duration = Duration::from_millis(200);

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl DisplayTerminal {
    pub fn new() -> Result<Self, io::Error> {
        // Only touch the terminal mode once nothing else can fail
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        crossterm::terminal::enable_raw_mode()?;

        // Set up the input handling thread
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = TICK_RATE
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::warn!(%err, "stopped polling terminal input");
                        return;
                    }
                }

                if last_tick.elapsed() >= TICK_RATE {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Ok(Self { terminal, input_rx })
    }

    /// Draws `schedule`, the `position`-th of `total` schedules being browsed.
    pub fn draw(&mut self, schedule: &Schedule, position: usize, total: usize) -> io::Result<()> {
        let averages = schedule.averages().ok();
        let timeline = schedule
            .timeline()
            .iter()
            .map(|slice| format!("P{} [{}-{}]", slice.pid, slice.start, slice.end))
            .collect::<Vec<_>>()
            .join("  ");

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Length(5),
                ])
                .split(f.size());

            let summary = Paragraph::new(match averages {
                Some(averages) => format!(
                    "Average waiting: {:.2} | Average turnaround: {:.2}",
                    averages.waiting, averages.turnaround
                ),
                None => "No process was scheduled.".to_owned(),
            })
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::LightBlue),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(match schedule.note() {
                        Some(note) => {
                            format!("{} ({note}) [{}/{}]", schedule.name(), position + 1, total)
                        }
                        None => format!("{} [{}/{}]", schedule.name(), position + 1, total),
                    })
                    .border_type(BorderType::Rounded),
            );

            f.render_widget(summary, chunks[0]);

            let items = schedule.completions().iter().map(|completion| {
                Row::new(vec![
                    Cell::from(completion.pid.to_string())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from("|"),
                    Cell::from(completion.arrival.to_string()),
                    Cell::from("|"),
                    Cell::from(completion.burst.to_string()),
                    Cell::from("|"),
                    Cell::from(completion.waiting.to_string()),
                    Cell::from("|"),
                    Cell::from(completion.turnaround.to_string()),
                ])
            });

            let table = Table::new(items)
                .header(
                    Row::new(vec![
                        "PID", "|", "Arrival", "|", "Burst", "|", "Waiting", "|", "Turnaround",
                    ])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .widths(&[
                    Constraint::Length(5),
                    Constraint::Length(1),
                    Constraint::Length(8),
                    Constraint::Length(1),
                    Constraint::Length(6),
                    Constraint::Length(1),
                    Constraint::Length(8),
                    Constraint::Length(1),
                    Constraint::Length(10),
                ])
                .block(
                    Block::default()
                        .title("Completion order")
                        .borders(Borders::ALL),
                )
                .style(Style::default().fg(Color::LightGreen))
                .column_spacing(1);

            f.render_widget(table, chunks[1]);

            let order = Paragraph::new(timeline.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Execution order (q: quit, n/p: next/previous)"),
                );

            f.render_widget(order, chunks[2]);
        })?;

        Ok(())
    }

    pub fn get_input(&self) -> RunnerEvent {
        // Get the user's input and return a matching event
        let Ok(event) = self.input_rx.recv() else {
            return RunnerEvent::Quit;
        };

        match event {
            DisplayEvent::Input(key) => {
                if key.modifiers.is_empty() {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return RunnerEvent::Quit,
                        KeyCode::Char('n') | KeyCode::Right => return RunnerEvent::Next,
                        KeyCode::Char('p') | KeyCode::Left => return RunnerEvent::Previous,
                        _ => {}
                    };
                }
            }
            DisplayEvent::Tick => {}
        }
        RunnerEvent::None
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        if let Err(err) = crossterm::terminal::disable_raw_mode() {
            tracing::warn!(%err, "failed to restore terminal mode");
        }
    }
}
