use crate::room::model::{CreatedRoom, Room, RoomStateUpdate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, JsonSchema)]
pub struct MessageResponse {
	pub message: String,
}

#[derive(Deserialize, Serialize, JsonSchema)]
pub struct CreateRoomRequest {
	/// Between 3 and 10 characters, stored in uppercase.
	pub code: String,
	#[serde(default)]
	pub track_url: Option<String>,
}

#[derive(Deserialize, Serialize, JsonSchema)]
pub struct CreateRoomResponse {
	pub id: String,
	pub code: String,
}

impl From<CreatedRoom> for CreateRoomResponse {
	fn from(CreatedRoom { id, code }: CreatedRoom) -> Self {
		Self {
			id: id.to_string(),
			code: code.to_string(),
		}
	}
}

#[derive(Deserialize, JsonSchema)]
pub struct RoomCodePath {
	/// Room code in any casing.
	pub code: String,
}

#[derive(Deserialize, Serialize, JsonSchema)]
pub struct JoinRoomRequest {
	pub code: String,
}

/// Partial playback state. Fields that are left out keep their stored value.
#[derive(Deserialize, Serialize, JsonSchema)]
pub struct UpdateRoomStateRequest {
	/// Ignored in favor of the code in the path.
	pub code: String,
	#[serde(default)]
	pub is_playing: Option<bool>,
	/// Playback position in seconds, must not be negative.
	#[serde(default)]
	pub position: Option<f64>,
	#[serde(default)]
	pub track_url: Option<String>,
}

impl From<UpdateRoomStateRequest> for RoomStateUpdate {
	fn from(request: UpdateRoomStateRequest) -> Self {
		Self {
			is_playing: request.is_playing,
			position: request.position,
			track_url: request.track_url,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct RoomResponse {
	pub id: String,
	pub code: String,
	pub track_url: Option<String>,
	pub is_playing: bool,
	/// Playback position in seconds.
	pub position: f64,
	/// Server time of the last state change in seconds since the unix epoch.
	pub updated_at: f64,
}

impl From<Room> for RoomResponse {
	fn from(room: Room) -> Self {
		Self {
			id: room.id.to_string(),
			code: room.code,
			track_url: room.track_url,
			is_playing: room.is_playing,
			position: room.position,
			updated_at: room.updated_at,
		}
	}
}

/// Human readable overview of the backend and its database connection.
#[derive(Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct DiagnosticsResponse {
	pub backend: String,
	pub database: String,
	pub database_url: String,
	pub database_name: String,
	pub connection_status: String,
	pub collections: Vec<String>,
}
