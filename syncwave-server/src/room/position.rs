use crate::room::error::ValidationError;

/// Playback position in seconds. Always finite and never negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Position(f64);

impl Position {
	pub const ZERO: Position = Position(0.0);

	pub fn new(seconds: f64) -> Result<Self, ValidationError> {
		if !seconds.is_finite() {
			return Err(ValidationError::NonFinitePosition);
		}

		if seconds < 0.0 {
			return Err(ValidationError::NegativePosition { position: seconds });
		}

		Ok(Self(seconds))
	}

	pub fn seconds(self) -> f64 {
		self.0
	}
}

impl TryFrom<f64> for Position {
	type Error = ValidationError;

	fn try_from(seconds: f64) -> Result<Self, Self::Error> {
		Self::new(seconds)
	}
}
