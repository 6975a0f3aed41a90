use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("LOKI_ENABLED is true but LOKI_URL is not set")]
    MissingLokiUrl,
    #[error("invalid LOKI_URL: {0}")]
    InvalidLokiUrl(#[from] url::ParseError),
    #[error("failed to build Loki layer: {0}")]
    Loki(String),
    #[error("global subscriber already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Where events go besides stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum LogSink {
    Console,
    Loki(Url),
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub loki_enabled: bool,
    pub loki_url: Option<String>,
    pub service_name: String,
    pub environment: String,
    pub log_level: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            loki_enabled: lookup("LOKI_ENABLED")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            loki_url: lookup("LOKI_URL"),
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "sunflower-prices".to_string()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn sink(&self) -> Result<LogSink, LoggingError> {
        if !self.loki_enabled {
            return Ok(LogSink::Console);
        }
        let raw = self.loki_url.as_deref().ok_or(LoggingError::MissingLokiUrl)?;
        Ok(LogSink::Loki(Url::parse(raw)?))
    }
}

/// Installs the global subscriber: env filter, fmt output, and the Loki
/// shipper when configured and compiled in.
pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    let sink = config.sink()?;
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer());

    match sink {
        LogSink::Console => registry.try_init()?,
        #[cfg(feature = "loki")]
        LogSink::Loki(url) => {
            let (loki_layer, task) = tracing_loki::builder()
                .label("service", &config.service_name)
                .and_then(|b| b.label("environment", &config.environment))
                .and_then(|b| b.build_url(url.clone()))
                .map_err(|e| LoggingError::Loki(e.to_string()))?;
            tokio::spawn(task);
            registry.with(loki_layer).try_init()?;
            tracing::info!("Shipping logs for {} ({}) to Loki at {}", config.service_name, config.environment, url);
        }
        #[cfg(not(feature = "loki"))]
        LogSink::Loki(url) => {
            registry.try_init()?;
            tracing::warn!("LOKI_URL {} ignored: built without the loki feature", url);
        }
    }

    tracing::info!("Logging initialized at level {}", config.log_level);
    Ok(())
}
