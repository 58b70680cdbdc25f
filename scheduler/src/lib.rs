//! Simulates CPU scheduling disciplines over a fixed set of processes and
//! reports per-process waiting and turnaround times.

pub mod config;
pub mod input;
pub mod logging;
pub mod report;
pub mod scheduler;
