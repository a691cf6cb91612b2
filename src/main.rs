use querydeck::infrastructure::bootstrap;
use querydeck::infrastructure::config::Settings;
use querydeck::interfaces::http::start_server;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    bootstrap::init_tracing();

    let settings = Settings::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let state = bootstrap::build_state(&settings)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    info!(
        host = %settings.server.host,
        port = settings.server.port,
        "Starting querydeck gateway"
    );
    start_server(&settings, state)?.await
}
