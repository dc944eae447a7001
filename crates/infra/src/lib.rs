mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{IEventRepo, InMemoryEventRepo, PostgresEventRepo, RepoError, Repos};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

/// Everything a request handler needs. It is created once when the process
/// starts and shared with every worker of the server.
#[derive(Clone)]
pub struct CalendarContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl CalendarContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    async fn create(config: Config) -> anyhow::Result<Self> {
        let repos = match &config.database_url {
            Some(connection_string) => Repos::create_postgres(connection_string).await?,
            None => Repos::create_inmemory(),
        };
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<CalendarContext> {
    CalendarContext::create(Config::new()).await
}
