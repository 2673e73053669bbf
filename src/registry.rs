//! The fixed set of metric sources, built once at startup and read-only
//! afterwards. Handlers share it through `Arc`; there is no mutable state to
//! coordinate between requests.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::sources::command::CommandRunner;
use crate::sources::disk::DiskSource;
use crate::sources::game::GameSource;
use crate::sources::host::HostSource;
use crate::sources::logs::LogSource;
use crate::sources::network::NetworkSource;
use crate::sources::service::ServiceSource;
use crate::sources::system::SystemSource;
use crate::sources::world::WorldSource;

pub struct Registry {
    pub system: SystemSource,
    pub disk: DiskSource,
    pub host: HostSource,
    pub network: NetworkSource,
    pub service: ServiceSource,
    pub game: GameSource,
    pub logs: LogSource,
    pub world: WorldSource,
}

impl Registry {
    pub fn new(config: &Config, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            system: SystemSource::new(),
            disk: DiskSource::new(config.disk_mount_point.clone()),
            host: HostSource::new(),
            network: NetworkSource::new(runner.clone()),
            service: ServiceSource::new(
                runner.clone(),
                config.service_unit.clone(),
                config.server_info_path.clone(),
            ),
            game: GameSource::new(
                config.query_host.clone(),
                config.query_port,
                Duration::from_secs(config.query_timeout_secs),
            ),
            logs: LogSource::new(runner, config.service_unit.clone(), config.log_tail_lines),
            world: WorldSource::new(config.properties_path.clone()),
        }
    }
}
