use clap::{Parser, ValueEnum};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

/// Runtime settings, read from flags or the environment (`.env` included).
#[derive(Debug, Clone, Parser)]
#[command(name = "calendar_events", version, about = "Calendar events HTTP service")]
pub struct Config {
    /// Port to run the server on
    #[arg(long, env = "PORT", default_value_t = 8888)]
    pub port: u16,

    /// Application environment
    #[arg(
        long = "env",
        env = "ENVIRONMENT",
        value_enum,
        default_value_t = Environment::Development
    )]
    pub environment: Environment,

    /// Seconds a single request may take, body read and response included
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 15)]
    pub request_timeout_secs: u64,

    /// Seconds to wait for in-flight requests after a shutdown signal
    #[arg(long, env = "SHUTDOWN_TIMEOUT_SECS", default_value_t = 10)]
    pub shutdown_timeout_secs: u64,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
