use crate::configuration::Configuration;
use crate::room::RoomService;
use crate::room::accessor::RoomAccessor;
use crate::store::Store;
use crate::store::sqlite::SqliteStore;
use crate::utils::time_source::TimeSource;
use axum::extract::FromRef;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	#[from_ref(skip)]
	pub store: Option<Arc<dyn Store>>,
	pub room_service: RoomService,
}

impl ApplicationContext {
	/// Connects to the configured database. Without a usable one the context is still created, but
	/// every room operation fails until the server is restarted with a working database.
	pub async fn new(configuration: Configuration, time_source: TimeSource) -> ApplicationContext {
		let store = connect_store(&configuration).await;
		Self::with_store(configuration, time_source, store)
	}

	pub fn with_store(
		configuration: Configuration,
		time_source: TimeSource,
		store: Option<Arc<dyn Store>>,
	) -> ApplicationContext {
		let room_service = RoomService::new(RoomAccessor::new(store.clone()), time_source);

		Self {
			configuration,
			store,
			room_service,
		}
	}

	pub async fn shutdown(&self) {
		if let Some(store) = &self.store {
			store.close().await;
			info!("Closed database connections.");
		}
	}
}

async fn connect_store(configuration: &Configuration) -> Option<Arc<dyn Store>> {
	let Some(database) = configuration.database() else {
		warn!("DATABASE_URL or DATABASE_NAME not set, running without a database.");
		return None;
	};

	match SqliteStore::connect(database.url).await {
		Ok(store) => {
			info!(database_name = database.name, "Connected to database.");
			Some(Arc::new(store))
		}
		Err(error) => {
			error!(database_name = database.name, %error, "Failed to connect to database, running without it.");
			None
		}
	}
}
