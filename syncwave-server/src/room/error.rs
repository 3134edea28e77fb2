use crate::room::code::CODE_LENGTH;
use crate::store::error::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error("Room code already exists")]
	AlreadyExists,
	#[error("Room not found")]
	NotFound,
	#[error("Database not configured")]
	StoreUnavailable,
	#[error("Store operation failed: {0}")]
	Store(#[from] StoreError),
}

/// Malformed client input, rejected before the store is touched.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
	#[error(
		"Room code must be between {} and {} characters long, got {length}.",
		CODE_LENGTH.start(),
		CODE_LENGTH.end()
	)]
	CodeLength { length: usize },
	#[error("Position must be greater than or equal to 0, got {position}.")]
	NegativePosition { position: f64 },
	#[error("Position must be a finite number.")]
	NonFinitePosition,
}
