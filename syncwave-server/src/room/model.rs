use crate::room::code::RoomCode;
use crate::room::error::ValidationError;
use crate::room::position::Position;
use sqlx::FromRow;

/// Store-assigned identifier of a room. Clients only ever see its string form.
#[derive(
	derive_more::From,
	derive_more::Into,
	derive_more::Display,
	sqlx::Type,
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
)]
#[sqlx(transparent)]
pub struct RoomId(uuid::Uuid);

impl RoomId {
	pub fn new_v4() -> Self {
		Self(uuid::Uuid::new_v4())
	}
}

#[derive(FromRow, Clone, Debug, PartialEq)]
pub struct Room {
	pub id: RoomId,
	pub code: String,
	pub track_url: Option<String>,
	pub is_playing: bool,
	pub position: f64,
	pub updated_at: f64,
}

/// A room that is about to be inserted. It starts paused at position 0.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRoom {
	pub code: RoomCode,
	pub track_url: Option<String>,
	pub updated_at: f64,
}

/// Identifies the room returned by a successful create.
#[derive(Clone, Debug, PartialEq)]
pub struct CreatedRoom {
	pub id: RoomId,
	pub code: RoomCode,
}

/// A single field assignment of a partial room update.
#[derive(Clone, Debug, PartialEq)]
pub enum RoomField {
	IsPlaying(bool),
	Position(Position),
	TrackUrl(String),
	UpdatedAt(f64),
}

/// Playback state sent by a client. Every field is optional and set independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomStateUpdate {
	pub is_playing: Option<bool>,
	pub position: Option<f64>,
	pub track_url: Option<String>,
}

impl RoomStateUpdate {
	/// Validates the update and turns every supplied value into the field it sets.
	///
	/// The result never contains [`RoomField::UpdatedAt`], that one is added by the caller once
	/// the previous timestamp of the room is known.
	pub fn into_fields(self) -> Result<Vec<RoomField>, ValidationError> {
		let Self {
			is_playing,
			position,
			track_url,
		} = self;
		let position = position.map(Position::new).transpose()?;

		Ok([
			is_playing.map(RoomField::IsPlaying),
			position.map(RoomField::Position),
			track_url.map(RoomField::TrackUrl),
		]
		.into_iter()
		.flatten()
		.collect())
	}
}
