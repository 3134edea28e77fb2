use crate::store::Store;
use crate::store::sqlite::SqliteStore;
use std::sync::Arc;

pub async fn store() -> SqliteStore {
	SqliteStore::connect("sqlite::memory:")
		.await
		.expect("Failed to create in-memory SQLite database")
}

pub async fn shared_store() -> Arc<dyn Store> {
	Arc::new(store().await)
}
