use crate::room::code::RoomCode;
use crate::room::model::{NewRoom, Room, RoomField, RoomId};
use crate::store::error::StoreError;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;

pub mod error;
pub mod sqlite;

/// Backend holding the `room` collection.
#[async_trait]
pub trait Store: Send + Sync {
	async fn find_room_by_code(&self, code: &RoomCode) -> Result<Option<Room>, StoreError>;
	async fn find_room(&self, room_id: RoomId) -> Result<Option<Room>, StoreError>;
	/// Inserts a new room. Fails with [`StoreError::UniqueViolation`] if the code is taken.
	async fn insert_room(&self, room: NewRoom) -> Result<RoomId, StoreError>;
	/// Sets the given fields and leaves all others untouched.
	async fn update_room_fields(&self, room_id: RoomId, fields: &[RoomField]) -> Result<(), StoreError>;
	async fn collection_names(&self) -> Result<Vec<String>, StoreError>;
	async fn close(&self);
}

assert_obj_safe!(Store);
