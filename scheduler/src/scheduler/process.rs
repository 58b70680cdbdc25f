pub type Pid = u32;
pub type Ticks = u32;

/// A process as declared before the simulation starts. Never mutated by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pid: Pid,
    arrival: Ticks,
    burst: Ticks,
    priority: i32,
}

impl Process {
    const DEFAULT_PRIORITY: i32 = 0;

    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks) -> Self {
        Process::with_priority(pid, arrival, burst, Process::DEFAULT_PRIORITY)
    }

    pub fn with_priority(pid: Pid, arrival: Ticks, burst: Ticks, priority: i32) -> Self {
        debug_assert!(burst > 0, "process {pid} must need some CPU time");
        Self {
            pid,
            arrival,
            burst,
            priority,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival(&self) -> Ticks {
        self.arrival
    }

    pub fn burst(&self) -> Ticks {
        self.burst
    }

    /// Lower values run first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn is_eligible(&self, clock: Ticks) -> bool {
        self.arrival <= clock
    }
}

/// Indices into `processes` ordered by arrival, ties kept in input order.
pub(super) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&index| processes[index].arrival());
    order
}
