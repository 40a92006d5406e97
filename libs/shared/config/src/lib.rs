use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

const DEFAULT_PRACTICE_NAME: &str = "Med Practice";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub practice_name: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            practice_name: DEFAULT_PRACTICE_NAME.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let practice_name = env::var("PRACTICE_NAME")
            .unwrap_or_else(|_| {
                warn!("PRACTICE_NAME not set, using default");
                defaults.practice_name.clone()
            });

        let host = match env::var("API_HOST") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("API_HOST '{}' is not a valid IP address, using default", raw);
                defaults.host
            }),
            Err(_) => {
                warn!("API_HOST not set, using default");
                defaults.host
            }
        };

        let port = match env::var("API_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("API_PORT '{}' is not a valid port, using default", raw);
                defaults.port
            }),
            Err(_) => {
                warn!("API_PORT not set, using default");
                defaults.port
            }
        };

        Self {
            practice_name,
            host,
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
