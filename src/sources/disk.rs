//! Disk usage for the configured mount point.

use std::path::PathBuf;
use sysinfo::Disks;

use super::SourceError;
use crate::models::DiskSpace;

const GIB: f64 = (1024u64 * 1024 * 1024) as f64;

pub struct DiskSource {
    mount_point: PathBuf,
}

impl DiskSource {
    pub fn new(mount_point: PathBuf) -> Self {
        Self { mount_point }
    }

    pub async fn sample(&self) -> Result<DiskSpace, SourceError> {
        let mount_point = self.mount_point.clone();
        tokio::task::spawn_blocking(move || -> Result<DiskSpace, SourceError> {
            let disks = Disks::new_with_refreshed_list();
            let disk = disks
                .list()
                .iter()
                .find(|d| d.mount_point() == mount_point.as_path())
                .ok_or_else(|| {
                    SourceError::NotFound(format!("mount point {}", mount_point.display()))
                })?;
            let total = disk.total_space();
            let free = disk.available_space();
            let used = total.saturating_sub(free);
            Ok(DiskSpace {
                total_disk_space: round2(total as f64 / GIB),
                used_disk_space: round2(used as f64 / GIB),
                free_disk_space: round2(free as f64 / GIB),
            })
        })
        .await
        .map_err(SourceError::task)?
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
