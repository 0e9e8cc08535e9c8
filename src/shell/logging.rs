use tracing_subscriber::{EnvFilter, fmt};

use crate::shell::config::Environment;

/// `RUST_LOG` wins when set; otherwise development logs at debug, production at info.
pub fn default_directive(environment: Environment) -> &'static str {
    match environment {
        Environment::Development => "debug",
        Environment::Production => "info",
    }
}

pub fn init(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(environment)));
    let builder = fmt().with_env_filter(filter);

    match environment {
        Environment::Development => builder.pretty().init(),
        Environment::Production => builder.compact().with_ansi(false).init(),
    }
}
