use crate::room::accessor::RoomAccessor;
use crate::room::code::RoomCode;
use crate::room::error::RoomError;
use crate::room::model::{CreatedRoom, NewRoom, Room, RoomField, RoomStateUpdate};
use crate::utils::time_source::TimeSource;
use tracing::{debug, info};

pub mod accessor;
pub mod code;
pub mod error;
pub mod model;
pub mod position;

/// Creates, looks up and mutates rooms.
///
/// Holds no state of its own, everything durable lives in the store behind the [`RoomAccessor`].
#[derive(Clone)]
pub struct RoomService {
	accessor: RoomAccessor,
	time_source: TimeSource,
}

impl RoomService {
	pub fn new(accessor: RoomAccessor, time_source: TimeSource) -> Self {
		Self { accessor, time_source }
	}

	pub async fn create_room(&self, code: &str, track_url: Option<String>) -> Result<CreatedRoom, RoomError> {
		let code = RoomCode::new(code)?;

		if self.accessor.find_by_code(&code).await?.is_some() {
			return Err(RoomError::AlreadyExists);
		}

		let room_id = self
			.accessor
			.insert(NewRoom {
				code: code.clone(),
				track_url,
				updated_at: self.time_source.now(),
			})
			.await?;
		info!(%room_id, %code, "Created room.");

		Ok(CreatedRoom { id: room_id, code })
	}

	pub async fn join_room(&self, code: &str) -> Result<Room, RoomError> {
		self.find_room(code).await
	}

	pub async fn get_room(&self, code: &str) -> Result<Room, RoomError> {
		self.find_room(code).await
	}

	/// Applies the supplied playback state and returns the room as stored afterwards.
	///
	/// Fields missing from `update` keep their value, `updated_at` is always advanced but never
	/// moves backwards, even if the clock does.
	pub async fn update_room_state(&self, code: &str, update: RoomStateUpdate) -> Result<Room, RoomError> {
		let mut fields = update.into_fields()?;
		let room = self.find_room(code).await?;

		let updated_at = self.time_source.now().max(room.updated_at);
		fields.push(RoomField::UpdatedAt(updated_at));

		self.accessor.update_fields(room.id, &fields).await?;
		debug!(room_id = %room.id, ?fields, "Updated room state.");

		self.accessor.find_by_id(room.id).await?.ok_or(RoomError::NotFound)
	}

	async fn find_room(&self, code: &str) -> Result<Room, RoomError> {
		let code = RoomCode::normalize(code);
		self.accessor.find_by_code(&code).await?.ok_or(RoomError::NotFound)
	}
}
