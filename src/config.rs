use std::{env, net::IpAddr};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub body_limit: usize,
    pub concurrency_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST")
            .unwrap_or_else(|_| "127.0.0.1".to_string())
            .parse::<IpAddr>()?;
        let port = env_or("APP_PORT", 3000);
        let body_limit = env_or("APP_BODY_LIMIT", 1024 * 1024);
        let concurrency_limit = env_or("APP_CONCURRENCY_LIMIT", 100);
        Ok(Self {
            host,
            port,
            body_limit,
            concurrency_limit,
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
