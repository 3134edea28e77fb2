use crate::room::code::RoomCode;
use crate::room::error::RoomError;
use crate::room::model::{NewRoom, Room, RoomField, RoomId};
use crate::store::Store;
use crate::store::error::StoreError;
use std::sync::Arc;

/// Mediates all access to the room collection.
///
/// The store is optional because the server keeps running without a configured database, in which
/// case every operation fails with [`RoomError::StoreUnavailable`].
#[derive(Clone, Default)]
pub struct RoomAccessor {
	store: Option<Arc<dyn Store>>,
}

impl RoomAccessor {
	pub fn new(store: Option<Arc<dyn Store>>) -> Self {
		Self { store }
	}

	fn store(&self) -> Result<&dyn Store, RoomError> {
		self.store.as_deref().ok_or(RoomError::StoreUnavailable)
	}

	pub async fn find_by_code(&self, code: &RoomCode) -> Result<Option<Room>, RoomError> {
		Ok(self.store()?.find_room_by_code(code).await?)
	}

	pub async fn find_by_id(&self, room_id: RoomId) -> Result<Option<Room>, RoomError> {
		Ok(self.store()?.find_room(room_id).await?)
	}

	/// Expects the caller to have checked that the code is free. A unique violation still
	/// surfaces as [`RoomError::AlreadyExists`] when a concurrent insert won.
	pub async fn insert(&self, room: NewRoom) -> Result<RoomId, RoomError> {
		self.store()?.insert_room(room).await.map_err(|error| match error {
			StoreError::UniqueViolation(_) => RoomError::AlreadyExists,
			error => error.into(),
		})
	}

	pub async fn update_fields(&self, room_id: RoomId, fields: &[RoomField]) -> Result<(), RoomError> {
		self.store()?
			.update_room_fields(room_id, fields)
			.await
			.map_err(|error| match error {
				StoreError::NotFound => RoomError::NotFound,
				error => error.into(),
			})
	}
}
