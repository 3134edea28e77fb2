use crate::context::ApplicationContext;
use crate::room::RoomService;
use crate::server::rest_api::diagnostics::diagnose;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::extract::JsonBody;
use crate::server::rest_api::models::{
	CreateRoomRequest, CreateRoomResponse, DiagnosticsResponse, JoinRoomRequest, MessageResponse, RoomCodePath,
	RoomResponse, UpdateRoomStateRequest,
};
use aide::axum::ApiRouter;
use aide::axum::routing::{get_with, post_with};
use aide::openapi::OpenApi;
use aide::transform::TransformOperation;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::debug;

mod diagnostics;
pub mod error;
mod extract;
pub mod models;

pub fn rest_api() -> ApiRouter<ApplicationContext> {
	ApiRouter::new()
		.api_route("/", get_with(root, |operation| operation.summary("Liveness message")))
		.api_route(
			"/test",
			get_with(test_database, |operation| {
				operation.summary("Reports backend and database status")
			}),
		)
		.api_route(
			"/api/rooms",
			post_with(create_room, |operation| {
				operation
					.summary("Create a room")
					.response_with::<400, ApiErrorResponse, _>(|response| {
						response.description("Invalid or already taken room code")
					})
					.response_with::<500, ApiErrorResponse, _>(|response| response.description("Database unavailable"))
			}),
		)
		.api_route(
			"/api/rooms/join",
			post_with(join_room, |operation| room_lookup(operation.summary("Join a room"))),
		)
		.api_route(
			"/api/rooms/{code}",
			get_with(get_room, |operation| room_lookup(operation.summary("Get a room"))).patch_with(
				update_room_state,
				|operation| {
					room_lookup(operation.summary("Update the playback state of a room"))
						.response_with::<400, ApiErrorResponse, _>(|response| response.description("Invalid position"))
				},
			),
		)
		.route("/api/openapi.json", axum::routing::get(openapi_json))
}

fn room_lookup(operation: TransformOperation) -> TransformOperation {
	operation
		.response_with::<404, ApiErrorResponse, _>(|response| response.description("Room not found"))
		.response_with::<500, ApiErrorResponse, _>(|response| response.description("Database unavailable"))
}

async fn root() -> Json<MessageResponse> {
	Json(MessageResponse {
		message: "SyncWave backend running".to_owned(),
	})
}

async fn test_database(State(context): State<ApplicationContext>) -> Json<DiagnosticsResponse> {
	Json(diagnose(&context.configuration, context.store.as_deref()).await)
}

async fn create_room(
	State(room_service): State<RoomService>,
	JsonBody(request): JsonBody<CreateRoomRequest>,
) -> Result<Json<CreateRoomResponse>, ApiErrorResponse> {
	let created = room_service.create_room(&request.code, request.track_url).await?;
	Ok(Json(created.into()))
}

async fn join_room(
	State(room_service): State<RoomService>,
	JsonBody(request): JsonBody<JoinRoomRequest>,
) -> Result<Json<RoomResponse>, ApiErrorResponse> {
	let room = room_service.join_room(&request.code).await?;
	Ok(Json(room.into()))
}

async fn get_room(
	State(room_service): State<RoomService>,
	Path(RoomCodePath { code }): Path<RoomCodePath>,
) -> Result<Json<RoomResponse>, ApiErrorResponse> {
	let room = room_service.get_room(&code).await?;
	Ok(Json(room.into()))
}

async fn update_room_state(
	State(room_service): State<RoomService>,
	Path(RoomCodePath { code }): Path<RoomCodePath>,
	JsonBody(request): JsonBody<UpdateRoomStateRequest>,
) -> Result<Json<RoomResponse>, ApiErrorResponse> {
	if !request.code.eq_ignore_ascii_case(&code) {
		debug!(path_code = %code, body_code = %request.code, "Room code in body differs from path, using path.");
	}

	let room = room_service.update_room_state(&code, request.into()).await?;
	Ok(Json(room.into()))
}

async fn openapi_json(Extension(api): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
	Json(OpenApi::clone(&api))
}
