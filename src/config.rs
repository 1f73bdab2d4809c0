use anyhow::Context;
use sea_orm::ConnectOptions;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://filmorate.db?mode=rwc".to_string());

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("DATABASE_MAX_CONNECTIONS")?;

        Ok(Self { database_url, max_connections })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.database_url.as_str());
        opts.max_connections(self.max_connections);
        opts
    }
}
