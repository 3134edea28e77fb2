use crate::room::error::RoomError;
use aide::OperationOutput;
use aide::generate::GenContext;
use aide::openapi::Operation;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Type-erased error response
///
/// NOTE: This type is inspired by RFC7807 (Problem Details for HTTP APIs) but spares on a lot of
/// the details to avoid complexity.
///
/// See: <https://www.rfc-editor.org/rfc/rfc7807.html>
#[derive(Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct ApiErrorResponse {
	pub r#type: String,
	pub status: u16,
	pub detail: String,
}

impl ApiErrorResponse {
	fn new(r#type: &str, status: StatusCode, detail: impl Into<String>) -> Self {
		Self {
			r#type: r#type.to_owned(),
			status: status.as_u16(),
			detail: detail.into(),
		}
	}
}

impl From<RoomError> for ApiErrorResponse {
	fn from(error: RoomError) -> Self {
		use RoomError::*;
		match &error {
			Validation(_) => Self::new("room-validation-failed", StatusCode::BAD_REQUEST, error.to_string()),
			AlreadyExists => Self::new("room-already-exists", StatusCode::BAD_REQUEST, error.to_string()),
			NotFound => Self::new("room-not-found", StatusCode::NOT_FOUND, error.to_string()),
			StoreUnavailable => Self::new(
				"database-not-configured",
				StatusCode::INTERNAL_SERVER_ERROR,
				error.to_string(),
			),
			Store(store_error) => {
				error!(error = %store_error, "Room operation failed in the store.");
				Self::new(
					"database-error",
					StatusCode::INTERNAL_SERVER_ERROR,
					"Database operation failed",
				)
			}
		}
	}
}

impl From<JsonRejection> for ApiErrorResponse {
	fn from(rejection: JsonRejection) -> Self {
		Self::new("invalid-request-body", rejection.status(), rejection.body_text())
	}
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		let status_code = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		(status_code, Json(self)).into_response()
	}
}

impl OperationOutput for ApiErrorResponse {
	type Inner = Self;

	fn operation_response(ctx: &mut GenContext, operation: &mut Operation) -> Option<aide::openapi::Response> {
		Json::<ApiErrorResponse>::operation_response(ctx, operation)
	}
}
