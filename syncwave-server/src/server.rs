use crate::context::ApplicationContext;
use aide::openapi::{Info, OpenApi};
use axum::{Extension, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let address = application_context.configuration.address;
	let handle = axum_server::Handle::new();
	tokio::spawn(shut_down_on_ctrl_c(
		handle.clone(),
		application_context.configuration.shutdown_timeout,
	));

	let result = axum_server::Server::bind(address)
		.handle(handle)
		.serve(create_router(application_context.clone()).into_make_service())
		.await;

	application_context.shutdown().await;
	result
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	let mut api = OpenApi {
		info: Info {
			title: "SyncWave API".to_owned(),
			version: env!("CARGO_PKG_VERSION").to_owned(),
			..Info::default()
		},
		..OpenApi::default()
	};

	rest_api::rest_api()
		.finish_api(&mut api)
		.layer(Extension(Arc::new(api)))
		.layer(CorsLayer::permissive())
		.with_state(application_context)
}

async fn shut_down_on_ctrl_c(handle: axum_server::Handle<std::net::SocketAddr>, timeout: Duration) {
	if let Err(error) = tokio::signal::ctrl_c().await {
		error!(%error, "Failed to listen for Ctrl-C, graceful shutdown is unavailable.");
		return;
	}

	info!("Shutting down.");
	handle.graceful_shutdown(Some(timeout));
}
