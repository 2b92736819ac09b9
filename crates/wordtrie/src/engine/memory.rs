//! Process memory readings used for admission control.

use sysinfo::{Pid, System};

/// Readings are refreshed from the OS once per this many calls.
pub const MEMORY_SAMPLE_INTERVAL: u32 = 4096;

/// Source of the approximate memory usage compared against the limit.
pub trait MemoryProbe {
    /// Current usage in bytes. May return a cached reading.
    fn used_bytes(&mut self) -> u64;

    /// Current usage in bytes, bypassing any cache.
    fn refresh(&mut self) -> u64 {
        self.used_bytes()
    }
}

impl<F> MemoryProbe for F
where
    F: FnMut() -> u64,
{
    fn used_bytes(&mut self) -> u64 {
        self()
    }
}

/// Resident memory of the current process, as reported by the OS.
///
/// Querying the OS for every word would dominate insertion time, so the
/// reading is cached and only refreshed every [`MEMORY_SAMPLE_INTERVAL`] calls.
pub struct ProcessMemoryProbe {
    system: System,
    pid: Option<Pid>,
    cached: u64,
    calls: u32,
}

impl std::fmt::Debug for ProcessMemoryProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessMemoryProbe")
            .field("pid", &self.pid)
            .field("cached", &self.cached)
            .finish()
    }
}

impl Default for ProcessMemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessMemoryProbe {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(error) => {
                log::warn!("cannot determine current pid, memory usage reads as 0: {error}");
                None
            }
        };
        Self {
            system: System::new(),
            pid,
            cached: 0,
            calls: 0,
        }
    }

    fn sample(&mut self) -> u64 {
        let Some(pid) = self.pid else {
            return 0;
        };
        self.system.refresh_process(pid);
        self.cached = self
            .system
            .process(pid)
            .map(|process| process.memory())
            .unwrap_or(0);
        self.cached
    }
}

impl MemoryProbe for ProcessMemoryProbe {
    fn used_bytes(&mut self) -> u64 {
        let due = self.calls % MEMORY_SAMPLE_INTERVAL == 0;
        self.calls = self.calls.wrapping_add(1);
        if due {
            self.sample()
        } else {
            self.cached
        }
    }

    fn refresh(&mut self) -> u64 {
        self.calls = 1;
        self.sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_probes() {
        let mut readings = vec![30, 20, 10];
        let mut probe = move || readings.pop().unwrap_or(0);
        assert_eq!(probe.used_bytes(), 10);
        assert_eq!(probe.refresh(), 20);
        assert_eq!(probe.used_bytes(), 30);
        assert_eq!(probe.used_bytes(), 0);
    }

    #[test]
    fn process_probe_reports_nonzero_usage() {
        let mut probe = ProcessMemoryProbe::new();
        let first = probe.refresh();
        assert!(first > 0);
        // Cached until the next sampling point.
        assert_eq!(probe.used_bytes(), first);
    }
}
