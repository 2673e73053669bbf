//! CPU, memory, swap and load-average sampling via sysinfo.

use sysinfo::System;

use super::SourceError;
use crate::models::HostMetrics;

const MIB: u64 = 1024 * 1024;

pub struct SystemSource;

impl SystemSource {
    pub fn new() -> Self {
        Self
    }

    pub async fn sample(&self) -> Result<HostMetrics, SourceError> {
        // sysinfo needs two CPU refreshes a minimum interval apart before the
        // usage figure means anything, so the whole read runs off the runtime.
        tokio::task::spawn_blocking(collect)
            .await
            .map_err(SourceError::task)
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

fn collect() -> HostMetrics {
    let mut sys = System::new();
    sys.refresh_cpu_usage();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_usage();
    sys.refresh_memory();

    let load = System::load_average();

    HostMetrics {
        cpu_usage: sys.global_cpu_usage(),
        memory_usage: percent(sys.used_memory(), sys.total_memory()),
        memory_used: sys.used_memory() / MIB,
        memory_total: sys.total_memory() / MIB,
        swap_usage: percent(sys.used_swap(), sys.total_swap()),
        swap_used: sys.used_swap() / MIB,
        swap_total: sys.total_swap() / MIB,
        load_average: [load.one, load.five, load.fifteen],
    }
}

fn percent(used: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64 * 100.0) as f32
}
