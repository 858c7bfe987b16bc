use anyhow::{Context, Result};

pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: env_or("PORT", "8080")?
                .parse()
                .context("PORT must be a number")?,
        };
        let database = DatabaseConfig {
            host: env_or("DATABASE_HOST", "localhost")?,
            port: env_or("DATABASE_PORT", "5432")?
                .parse()
                .context("DATABASE_PORT must be a number")?,
            username: env_or("DATABASE_USERNAME", "app")?,
            password: env_or("DATABASE_PASSWORD", "passwd")?,
            database: env_or("DATABASE_NAME", "app")?,
        };
        Ok(Self { server, database })
    }
}

pub struct ServerConfig {
    pub port: u16,
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

fn env_or(key: &str, default: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(v) => Ok(v),
        Err(std::env::VarError::NotPresent) => Ok(default.to_string()),
        Err(e) => Err(e).with_context(|| format!("failed to read {key}")),
    }
}
