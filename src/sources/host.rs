//! Static host facts: distribution, kernel version, human-readable uptime.
//! All native via sysinfo; nothing here shells out.

use sysinfo::System;

use crate::models::SystemInfo;

pub struct HostSource;

impl HostSource {
    pub fn new() -> Self {
        Self
    }

    pub fn info(&self) -> SystemInfo {
        SystemInfo {
            distro: System::long_os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        }
    }

    pub fn uptime(&self) -> String {
        format_uptime(System::uptime())
    }
}

impl Default for HostSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats seconds the way `uptime -p` prints them.
fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 || parts.is_empty() {
        parts.push(plural(minutes, "minute"));
    }
    format!("up {}", parts.join(", "))
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting_matches_uptime_p() {
        assert_eq!(format_uptime(0), "up 0 minutes");
        assert_eq!(format_uptime(59), "up 0 minutes");
        assert_eq!(format_uptime(60), "up 1 minute");
        assert_eq!(format_uptime(3_600), "up 1 hour");
        assert_eq!(format_uptime(3_660), "up 1 hour, 1 minute");
        assert_eq!(
            format_uptime(2 * 86_400 + 3 * 3_600 + 14 * 60),
            "up 2 days, 3 hours, 14 minutes"
        );
        // Whole days: no trailing zero-minute part.
        assert_eq!(format_uptime(86_400), "up 1 day");
    }

    #[test]
    fn info_fields_are_never_empty() {
        let info = HostSource::new().info();
        assert!(!info.distro.is_empty());
        assert!(!info.kernel_version.is_empty());
    }
}
