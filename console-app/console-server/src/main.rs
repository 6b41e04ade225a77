use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method, StatusCode};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{debug, error, info};

use console_api::AppState;
use console_core::services::{BreadcrumbBuilder, MenuCache};
use console_infrastructure::{
    RemoteApiClient, RemoteDashboardTemplateRepository, RemoteMenuTemplateRepository,
    RemoteStudyRepository, RemoteWidgetCatalog,
};
use console_shared::config::AppConfig;
use console_shared::constants::PERMISSIONS_HEADER;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    console_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Remote API collaborators
    info!("Using remote API at {}", config.remote.base_url);
    let client = RemoteApiClient::new(&config.remote)?;

    let menu_cache = MenuCache::new(config.menu.cache_ttl());
    let breadcrumbs = BreadcrumbBuilder::new(
        config.breadcrumb.home_label.clone(),
        config.breadcrumb.home_href.clone(),
    );

    let state = AppState::from_repositories(
        Arc::new(RemoteStudyRepository::new(client.clone())),
        Arc::new(RemoteMenuTemplateRepository::new(client.clone())),
        Arc::new(RemoteDashboardTemplateRepository::new(client.clone())),
        Arc::new(RemoteWidgetCatalog::new(client)),
        menu_cache.clone(),
        breadcrumbs,
    );

    // Expired entries are also dropped lazily on read
    if let Some(interval) = config.menu.sweep_interval() {
        spawn_cache_sweeper(menu_cache, interval);
    }

    let cors_origin: HeaderValue = config.app.cors_origin.parse()?;
    let app = console_api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.remote.timeout() + Duration::from_secs(5),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(cors_origin)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    HeaderName::from_static(PERMISSIONS_HEADER),
                ]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn spawn_cache_sweeper(cache: MenuCache, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let removed = cache.cleanup_expired();
            if removed > 0 {
                debug!("Menu cache sweep removed {} entries", removed);
            }
        }
    });
}
