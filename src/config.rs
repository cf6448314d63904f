use crate::error::Result;
use crate::query::DEFAULT_REFERENCE_GENERATION;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for a viewer process
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// GA log file loaded at startup
    pub log_file: PathBuf,
    /// Interface to bind
    pub host: String,
    /// HTTP port
    pub port: u16,
    /// Generation whose population size bounds the index slider
    pub reference_generation: i64,
    /// Prometheus exporter port, disabled when unset
    pub metrics_port: Option<u16>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::new(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            reference_generation: DEFAULT_REFERENCE_GENERATION,
            metrics_port: None,
        }
    }
}

impl ViewerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>> {
        match self.metrics_port {
            Some(port) => Ok(Some(format!("{}:{}", self.host, port).parse()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewerError;

    #[test]
    fn test_config_default() {
        let config = ViewerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.reference_generation, 1);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:5000");
        assert_eq!(config.metrics_addr().unwrap(), None);
    }

    #[test]
    fn test_invalid_host() {
        let config = ViewerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.socket_addr(),
            Err(ViewerError::ConfigError(_))
        ));
    }
}
