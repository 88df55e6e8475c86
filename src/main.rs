use config::{Config, Environment, File};
use person_registry::models::config::ServerConfig;
use person_registry::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config_path = std::env::var("CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    let server_config: ServerConfig = Config::builder()
        .add_source(File::with_name(&config_path))
        .add_source(Environment::default())
        .build()
        .and_then(Config::try_deserialize)
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    run(server_config).await
}
