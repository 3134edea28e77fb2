use crate::server::rest_api::error::ApiErrorResponse;
use aide::OperationInput;
use aide::generate::GenContext;
use aide::openapi::Operation;
use axum::extract::FromRequest;
use schemars::JsonSchema;

/// [`axum::Json`] that renders rejected bodies as [`ApiErrorResponse`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiErrorResponse))]
pub struct JsonBody<T>(pub T);

impl<T: JsonSchema> OperationInput for JsonBody<T> {
	fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
		axum::Json::<T>::operation_input(ctx, operation);
	}
}
