use calendar_events::shell::{self, config::Config, logging};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    logging::init(config.environment);

    shell::run(config).await
}
