use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Sustained requests/second allowed per client IP.
    pub rate_limit_per_second: u64,
    /// Burst capacity per client IP.
    pub rate_limit_burst: u32,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: std::env::var("DB_URL")
                .or_else(|_| std::env::var("DATABASE_URL"))
                .map_err(|_| {
                    anyhow::anyhow!("DB_URL or DATABASE_URL environment variable required")
                })
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("DB_URL cannot be empty");
                    }
                    if !url.starts_with("postgresql://") && !url.starts_with("postgres://") {
                        anyhow::bail!("DB_URL must start with postgresql:// or postgres://");
                    }
                    Ok(url)
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            rate_limit_per_second: std::env::var("RATE_LIMIT_PER_SECOND")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_PER_SECOND must be a positive number"))?,
            rate_limit_burst: std::env::var("RATE_LIMIT_BURST")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_BURST must be a positive number"))?,
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| (1024 * 1024).to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("MAX_BODY_BYTES must be a positive number"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!(
            "Database URL: {}...",
            &config.database_url[..20.min(config.database_url.len())]
        );
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!(
            "Rate limit: {}/s burst {}",
            config.rate_limit_per_second,
            config.rate_limit_burst
        );

        Ok(config)
    }
}
