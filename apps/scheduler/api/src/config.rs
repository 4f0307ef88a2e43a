use core_config::{
    AppInfo, FromEnv, app_info, database::DatabaseConfig, scheduler::SchedulerConfig,
    server::ServerConfig,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: DatabaseConfig,
    pub scheduler: SchedulerConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env()?; // DATABASE_URL only required for EVENT_STORE=postgres
        let scheduler = SchedulerConfig::from_env()?;
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!(),
            database,
            scheduler,
            server,
            environment,
        })
    }
}
