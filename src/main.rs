use clap::Parser;
use pokemon_catalog::{server, Config};

#[tokio::main]
async fn main() {
    let config = Config::parse();
    config.init_logging();

    if let Err(e) = server::run(config).await {
        log::error!("pokemon-catalog stopped: {}", e);
        std::process::exit(1);
    }
}
