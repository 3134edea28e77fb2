use crate::room::error::ValidationError;
use std::ops::RangeInclusive;

/// Allowed length of a room code in characters, as typed by the client.
pub const CODE_LENGTH: RangeInclusive<usize> = 3..=10;

/// Room code in its normalized (uppercase) form.
///
/// Codes are case-insensitive for clients, so every code is uppercased before it is stored or
/// looked up.
#[derive(Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub struct RoomCode(String);

impl RoomCode {
	/// Validates a code for a room that is about to be created.
	pub fn new(code: &str) -> Result<Self, ValidationError> {
		let length = code.chars().count();
		if !CODE_LENGTH.contains(&length) {
			return Err(ValidationError::CodeLength { length });
		}

		Ok(Self::normalize(code))
	}

	/// Normalizes a code for lookup. Codes of invalid length are simply never found.
	pub fn normalize(code: &str) -> Self {
		Self(code.to_uppercase())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}
