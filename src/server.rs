use std::io;
use std::os::unix::fs::FileTypeExt;
use std::path::Path;

use axum::Router;
use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::compression::CompressionLayer;

use crate::app::{shell, App};
use crate::config::Config;
use crate::error::AppError;

/// Build the site router: server-rendered routes, the `/pkg` bundle and static
/// assets, with request tracing and response compression.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(OtelInResponseLayer)
        .layer(OtelAxumLayer::default())
        .with_state(leptos_options)
}

#[tracing::instrument(skip(config))]
pub async fn serve(config: &Config) -> Result<(), AppError> {
    let conf = get_configuration(None).map_err(|e| AppError::Leptos(e.to_string()))?;
    let site_addr = conf.leptos_options.site_addr;
    let app = router(conf.leptos_options);

    if let Some(socket_path) = &config.socket {
        tracing::info!("listening on unix socket {}", socket_path);
        let listener = bind_unix(Path::new(socket_path))?;
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        let addr = config.listen_addr(site_addr)?;
        tracing::info!("listening on http://{}", &addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

/// Bind a unix socket, replacing a stale socket file left by a previous run.
/// Any other kind of file at `path` is left alone and the bind fails.
fn bind_unix(path: &Path) -> io::Result<tokio::net::UnixListener> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_socket() => {
            tracing::debug!(path = %path.display(), "removing stale socket");
            std::fs::remove_file(path)?;
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    tokio::net::UnixListener::bind(path)
}
