use actix_web::{middleware::Logger, App, HttpServer};
use env_logger::Env;
use log::{debug, info, warn};

use crate::{
    config::{Config, Environment},
    db::Database,
    errors::AppError,
    middleware::RequestLogger,
    routes, services,
    services::ShortLinkServiceType,
};

// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

fn log_filter(config: &Config) -> String {
    match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug,actix_web=info".to_string(),
        Environment::Production => "info,actix_web=warn".to_string(),
    }
}

fn setup_logging(config: &Config) -> AppResult<()> {
    let env = Env::default()
        .filter_or("RUST_LOG", log_filter(config))
        .write_style_or("RUST_LOG_STYLE", "always");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

/// Opens the store connection, applying the startup policy on failure
async fn connect_store(config: &Config) -> AppResult<Database> {
    match Database::connect(&config.redis).await {
        Ok(db) => Ok(db),
        Err(e) if config.redis.required => Err(e.into()),
        Err(e) => {
            warn!(
                "Starting without a store connection ({}); store-backed requests will fail",
                e
            );
            Ok(Database::disconnected())
        }
    }
}

pub async fn server() -> AppResult<()> {
    let config = Config::load()?;

    setup_logging(&config)?;

    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {:?}", config.app.environment);
    info!(
        "Binding to {}:{} with {} workers",
        config.server.host, config.server.port, config.server.workers
    );

    if config.app.environment == Environment::Development {
        debug!("Debug logging enabled");
        debug!("Full configuration: {:?}", config);
    }

    let db = connect_store(&config).await?;

    let enable_debug_logging = config.app.environment != Environment::Production;

    let log_format = if enable_debug_logging {
        "%a \"%r\" %s %b %T"
    } else {
        "%a \"%r\" %s %b %T \"%{Referer}i\" \"%{User-Agent}i\" %{X-Request-ID}o"
    };

    let app_db = db.clone();
    HttpServer::new(move || {
        let db = app_db.clone();
        App::new()
            .wrap(RequestLogger::new(enable_debug_logging))
            .wrap(Logger::new(log_format))
            .configure(|cfg| services::register(db, cfg))
            .configure(routes::configure_routes::<ShortLinkServiceType>)
    })
    .workers(config.server.workers)
    .bind((config.server.host.to_string(), config.server.port))?
    .run()
    .await?;

    info!("HTTP server stopped");
    db.shutdown().await;

    Ok(())
}
