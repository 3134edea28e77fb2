use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::models::{CreateRoomResponse, DiagnosticsResponse, RoomResponse};
use crate::server_tests::test_client::TestClient;
use crate::server_tests::{START_TIME, start_test_server, start_test_server_without_database};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn should_answer_on_root() {
	let (client, _) = start_test_server().await;

	let response = client.get("/").send().await.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	let body = response.json::<serde_json::Value>().await.expect("Invalid JSON");
	assert_eq!(json!({"message": "SyncWave backend running"}), body);
}

#[tokio::test]
async fn should_create_join_get_and_update_room() {
	let (client, time_source) = start_test_server().await;

	let (status, created) = create_room(&client, json!({"code": "abc"})).await;
	assert_eq!(StatusCode::OK, status);
	assert_eq!("ABC", created.code);

	let (status, joined) = send::<RoomResponse>(client.post("/api/rooms/join").json(&json!({"code": "ABC"}))).await;
	assert_eq!(StatusCode::OK, status);
	assert_eq!(
		RoomResponse {
			id: created.id.clone(),
			code: "ABC".to_owned(),
			track_url: None,
			is_playing: false,
			position: 0.0,
			updated_at: START_TIME,
		},
		joined
	);

	time_source.advance_time(Duration::from_secs(3));
	let (status, updated) = send::<RoomResponse>(client.patch("/api/rooms/abc").json(&json!({
		"code": "abc",
		"is_playing": true,
		"position": 42.5,
	})))
	.await;
	assert_eq!(StatusCode::OK, status);
	assert!(updated.is_playing);
	assert_eq!(42.5, updated.position);
	assert_eq!(None, updated.track_url);
	assert_eq!(START_TIME + 3.0, updated.updated_at);

	let (status, fetched) = send::<RoomResponse>(client.get("/api/rooms/aBc")).await;
	assert_eq!(StatusCode::OK, status);
	assert_eq!(updated, fetched);
}

#[tokio::test]
async fn should_create_room_with_track() {
	let (client, _) = start_test_server().await;

	create_room(
		&client,
		json!({"code": "party", "track_url": "https://example.com/track.mp3"}),
	)
	.await;

	let (_, room) = send::<RoomResponse>(client.get("/api/rooms/PARTY")).await;
	assert_eq!(Some("https://example.com/track.mp3"), room.track_url.as_deref());
	assert!(!room.is_playing);
	assert_eq!(0.0, room.position);
}

#[tokio::test]
async fn should_reject_taken_room_code() {
	let (client, _) = start_test_server().await;
	create_room(&client, json!({"code": "abc"})).await;

	let (status, error) = send::<ApiErrorResponse>(client.post("/api/rooms").json(&json!({"code": "ABC"}))).await;

	assert_eq!(StatusCode::BAD_REQUEST, status);
	assert_eq!(
		ApiErrorResponse {
			r#type: "room-already-exists".to_owned(),
			status: 400,
			detail: "Room code already exists".to_owned(),
		},
		error
	);
}

#[tokio::test]
async fn should_reject_room_codes_of_invalid_length() {
	let (client, _) = start_test_server().await;

	for code in ["ab", "abcdefghijk"] {
		let (status, error) = send::<ApiErrorResponse>(client.post("/api/rooms").json(&json!({"code": code}))).await;

		assert_eq!(StatusCode::BAD_REQUEST, status, "code {code}");
		assert_eq!("room-validation-failed", error.r#type);
	}
}

#[tokio::test]
async fn should_not_find_unknown_room() {
	let (client, _) = start_test_server().await;

	let (join_status, join_error) =
		send::<ApiErrorResponse>(client.post("/api/rooms/join").json(&json!({"code": "ghost"}))).await;
	let (get_status, _) = send::<ApiErrorResponse>(client.get("/api/rooms/ghost")).await;
	let (patch_status, _) = send::<ApiErrorResponse>(
		client
			.patch("/api/rooms/ghost")
			.json(&json!({"code": "ghost", "is_playing": true})),
	)
	.await;

	assert_eq!(StatusCode::NOT_FOUND, join_status);
	assert_eq!("Room not found", join_error.detail);
	assert_eq!(StatusCode::NOT_FOUND, get_status);
	assert_eq!(StatusCode::NOT_FOUND, patch_status);
}

#[tokio::test]
async fn should_reject_negative_position_and_keep_room_unchanged() {
	let (client, _) = start_test_server().await;
	create_room(&client, json!({"code": "abc"})).await;
	let (_, before) = send::<RoomResponse>(client.get("/api/rooms/abc")).await;

	let (status, error) = send::<ApiErrorResponse>(
		client
			.patch("/api/rooms/abc")
			.json(&json!({"code": "abc", "is_playing": true, "position": -1.0})),
	)
	.await;

	assert_eq!(StatusCode::BAD_REQUEST, status);
	assert_eq!("room-validation-failed", error.r#type);
	let (_, after) = send::<RoomResponse>(client.get("/api/rooms/abc")).await;
	assert_eq!(before, after);
}

#[tokio::test]
async fn should_use_path_code_when_body_code_differs() {
	let (client, _) = start_test_server().await;
	create_room(&client, json!({"code": "abc"})).await;
	create_room(&client, json!({"code": "xyz"})).await;

	let (status, updated) = send::<RoomResponse>(
		client
			.patch("/api/rooms/abc")
			.json(&json!({"code": "xyz", "position": 7.0})),
	)
	.await;

	assert_eq!(StatusCode::OK, status);
	assert_eq!("ABC", updated.code);
	let (_, untouched) = send::<RoomResponse>(client.get("/api/rooms/xyz")).await;
	assert_eq!(0.0, untouched.position);
}

#[tokio::test]
async fn should_reject_malformed_bodies_in_error_format() {
	let (client, _) = start_test_server().await;

	let (missing_code_status, missing_code) =
		send::<ApiErrorResponse>(client.post("/api/rooms").json(&json!({"track_url": "track.mp3"}))).await;
	let (no_json_status, no_json) =
		send::<ApiErrorResponse>(client.post("/api/rooms").body(r#"{"code": "abc"}"#)).await;

	assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, missing_code_status);
	assert_eq!("invalid-request-body", missing_code.r#type);
	assert_eq!(422, missing_code.status);
	assert_eq!(StatusCode::UNSUPPORTED_MEDIA_TYPE, no_json_status);
	assert_eq!(415, no_json.status);
}

#[tokio::test]
async fn should_fail_room_routes_without_database() {
	let client = start_test_server_without_database().await;

	let responses = [
		send::<ApiErrorResponse>(client.post("/api/rooms").json(&json!({"code": "abc"}))).await,
		send::<ApiErrorResponse>(client.post("/api/rooms/join").json(&json!({"code": "abc"}))).await,
		send::<ApiErrorResponse>(client.get("/api/rooms/abc")).await,
		send::<ApiErrorResponse>(client.patch("/api/rooms/abc").json(&json!({"code": "abc"}))).await,
	];

	for (status, error) in responses {
		assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
		assert_eq!("Database not configured", error.detail);
	}
}

#[tokio::test]
async fn should_report_working_database() {
	let (client, _) = start_test_server().await;

	let (status, diagnostics) = send::<DiagnosticsResponse>(client.get("/test")).await;

	assert_eq!(StatusCode::OK, status);
	assert_eq!("✅ Running", diagnostics.backend);
	assert_eq!("✅ Connected & Working", diagnostics.database);
	assert_eq!("Connected", diagnostics.connection_status);
	assert_eq!(vec!["room".to_owned()], diagnostics.collections);
}

#[tokio::test]
async fn should_report_missing_database() {
	let client = start_test_server_without_database().await;

	let (status, diagnostics) = send::<DiagnosticsResponse>(client.get("/test")).await;

	assert_eq!(StatusCode::OK, status);
	assert_eq!("❌ Not Available", diagnostics.database);
	assert_eq!("❌ Not Set", diagnostics.database_url);
	assert_eq!("Not Connected", diagnostics.connection_status);
}

#[tokio::test]
async fn should_provide_openapi_json() {
	let (client, _) = start_test_server().await;

	// Only the parts that are checked, the full document is not needed here.
	#[derive(Deserialize)]
	struct OpenApi {
		openapi: String,
		paths: serde_json::Map<String, serde_json::Value>,
	}
	let (status, specification) = send::<OpenApi>(client.get("/api/openapi.json")).await;

	assert_eq!(StatusCode::OK, status);
	assert!(specification.openapi.starts_with("3."));
	for path in ["/api/rooms", "/api/rooms/join", "/api/rooms/{code}"] {
		assert!(specification.paths.contains_key(path), "Missing {path}");
	}
}

async fn create_room(client: &TestClient, body: serde_json::Value) -> (StatusCode, CreateRoomResponse) {
	send(client.post("/api/rooms").json(&body)).await
}

async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> (StatusCode, T) {
	let response = request.send().await.expect("Request failed.");
	let status = response.status();
	let body = response.json::<T>().await.expect("Failed to deserialize response body");
	(status, body)
}
