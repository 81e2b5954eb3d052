pub mod domain;
pub mod handlers;
pub mod shared;
pub mod system;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, patch, post, put},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the build output
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep application logs, quiet the SQL layer
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Per-request log line: time | duration | status | method path
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use chrono::Utc;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let duration = start.elapsed();
        let status = response.status().as_u16();
        let color_code = if status == 200 { "36" } else { "33" };
        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {} {:>6} {}",
            color_code,
            Utc::now().format("%H:%M:%S"),
            duration.as_millis(),
            status,
            method,
            uri.path()
        );

        response
    }

    // Load config, then bring up the database
    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::data::db::initialize_database(Some(&db_path.to_string_lossy()))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    // Seed the shared admin credential and the site copy singleton
    system::initialization::ensure_admin_credential_exists().await?;
    domain::site_settings::service::get().await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    // Public surface: reads, login, and landing-page order placement.
    let public = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/services", get(handlers::services::list_all))
        .route("/api/services/:id", get(handlers::services::get_by_id))
        .route(
            "/api/payment_methods",
            get(handlers::payment_methods::list_all),
        )
        .route(
            "/api/payment_methods/:id",
            get(handlers::payment_methods::get_by_id),
        )
        .route(
            "/api/orders",
            get(handlers::orders::list_all).post(handlers::orders::create),
        )
        .route("/api/orders/:id", get(handlers::orders::get_by_id))
        .route("/api/site_settings", get(handlers::site_settings::get));

    // Admin surface: every other mutation requires a bearer token.
    let protected = Router::new()
        .route(
            "/api/auth/change-password",
            post(handlers::auth::change_password),
        )
        .route("/api/services", post(handlers::services::create))
        .route(
            "/api/services/:id",
            patch(handlers::services::update).delete(handlers::services::delete),
        )
        .route(
            "/api/payment_methods",
            post(handlers::payment_methods::create),
        )
        .route(
            "/api/payment_methods/:id",
            patch(handlers::payment_methods::update).delete(handlers::payment_methods::delete),
        )
        .route(
            "/api/orders/:id",
            patch(handlers::orders::update).delete(handlers::orders::delete),
        )
        .route("/api/site_settings", put(handlers::site_settings::update))
        .route_layer(middleware::from_fn(system::auth::middleware::require_auth));

    let app = public
        .merge(protected)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
