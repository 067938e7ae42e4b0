#![recursion_limit = "512"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use axum::http::{HeaderValue, header};
    use genlingo::app::*;
    use genlingo::core::config::Config;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tower_http::set_header::SetResponseHeaderLayer;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!(
        compression = config.compression,
        static_cache_secs = ?config.static_cache_secs,
        "Config loaded"
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(err) => {
            tracing::error!("failed to read leptos configuration: {err}");
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br and .gz variants when cargo-leptos produced them
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let mut pkg_router = Router::new().nest_service("/pkg", pkg_service);
    if let Some(secs) = config.static_cache_secs {
        match HeaderValue::from_str(&format!("public, max-age={secs}")) {
            Ok(value) => {
                pkg_router =
                    pkg_router.layer(SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, value));
            }
            Err(err) => tracing::warn!("skipping Cache-Control header: {err}"),
        }
    }

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let mut app = Router::new().merge(pkg_router).merge(leptos_router);
    if config.compression {
        // Brotli first, gzip as fallback
        app = app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );
    }

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    tracing::info!("listening on http://{}", &addr);
    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("server error: {err}");
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
