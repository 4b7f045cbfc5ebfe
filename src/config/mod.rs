use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Config::default();

        let host = match env::var("HOST") {
            Ok(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid HOST value {:?}: {}", value, e))?,
            Err(_) => defaults.host,
        };

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT value {:?}: {}", value, e))?,
            Err(_) => defaults.port,
        };

        Ok(Config { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var("HOST");
        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear();
        env::set_var("HOST", "127.0.0.1");
        env::set_var("PORT", "9090");
        let config = Config::from_env().unwrap();
        clear();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear();
        env::set_var("PORT", "not-a-port");
        let result = Config::from_env();
        clear();
        let err = result.unwrap_err().to_string();
        assert!(err.contains("PORT"), "unexpected error: {}", err);
    }
}
