//!
//! Carlog HTTP server: vehicle maintenance and energy tracking.
//! Reads configuration from TOML file (~/.config/carlog/config.toml).

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use carlog::config::AppConfig;
use carlog::domain::RefreshTokenRepositoryInterface;
use carlog::infrastructure::crypto::jwt::JwtConfig;
use carlog::infrastructure::database::migrator::Migrator;
use carlog::infrastructure::database::repositories::RefreshTokenRepository;
use carlog::shared::shutdown::shutdown_signal;
use carlog::{create_api_router, default_config_path, init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CARLOG_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    info!("Starting Carlog service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("failed to install Prometheus metrics recorder: {}", e))?;
    info!("Prometheus metrics recorder installed");

    // ── Build sub-configs from AppConfig ───────────────────────
    let db_config = if let Ok(url) = std::env::var("DATABASE_URL") {
        DatabaseConfig { url }
    } else {
        DatabaseConfig {
            url: app_cfg.database.url.clone(),
        }
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "carlog".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Drop long-expired sessions before serving traffic
    let purged = RefreshTokenRepository::new(db.clone())
        .delete_expired(chrono::Utc::now())
        .await?;
    if purged > 0 {
        info!(purged, "Expired refresh tokens removed");
    }

    // ── REST API server ────────────────────────────────────────
    let api_router = create_api_router(db, jwt_config, prometheus_handle);

    let api_addr = app_cfg.server_address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(cfg: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level));
    if cfg.logging.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
