use crate::configuration::Configuration;
use crate::server::rest_api::models::DiagnosticsResponse;
use crate::store::Store;
use tracing::warn;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_LENGTH: usize = 50;

/// Reports whether the database is configured and reachable. Store failures end up in the
/// `database` message instead of failing the request.
pub async fn diagnose(configuration: &Configuration, store: Option<&dyn Store>) -> DiagnosticsResponse {
	let mut diagnostics = DiagnosticsResponse {
		backend: "✅ Running".to_owned(),
		database: "❌ Not Available".to_owned(),
		database_url: set_or_not(configuration.database_url.as_deref()),
		database_name: set_or_not(configuration.database_name.as_deref()),
		connection_status: "Not Connected".to_owned(),
		collections: Vec::new(),
	};

	let Some(store) = store else {
		if configuration.database().is_some() {
			diagnostics.database = "⚠️  Available but not initialized".to_owned();
		}
		return diagnostics;
	};

	diagnostics.connection_status = "Connected".to_owned();
	match store.collection_names().await {
		Ok(mut collections) => {
			collections.truncate(MAX_COLLECTIONS);
			diagnostics.collections = collections;
			diagnostics.database = "✅ Connected & Working".to_owned();
		}
		Err(error) => {
			warn!(%error, "Failed to list collections.");
			diagnostics.database = format!("⚠️  Connected but Error: {}", truncate(&error.to_string()));
		}
	}

	diagnostics
}

fn set_or_not(value: Option<&str>) -> String {
	if value.is_some() { "✅ Set" } else { "❌ Not Set" }.to_owned()
}

fn truncate(message: &str) -> String {
	message.chars().take(MAX_ERROR_LENGTH).collect()
}
