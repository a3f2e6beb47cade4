use rail_itinerary::config::NetworkConfig;
use rail_itinerary::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Usage: web_server [port] [network-config.json]
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(port) => port.parse()?,
        None => 3005,
    };
    let network = match args.get(2) {
        Some(path) => NetworkConfig::from_path(path)?,
        None => NetworkConfig::default(),
    };

    let config = ServerConfig {
        port,
        network,
        ..Default::default()
    };

    log::info!(
        "Starting with CORS {} and at most {} stored networks",
        if config.enable_cors { "enabled" } else { "disabled" },
        config.max_sessions
    );

    start_server_with_config(config).await?;

    Ok(())
}
