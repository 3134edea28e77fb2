use chrono::{DateTime, Utc};
#[cfg(test)]
use parking_lot::Mutex;
#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

/// Wall clock used to timestamp room mutations.
///
/// Tests create it with [`TimeSource::test`] to get a clock that only moves when told to.
#[derive(Clone, Default)]
pub struct TimeSource {
	#[cfg(test)]
	test_clock: Option<Arc<Mutex<f64>>>,
}

impl TimeSource {
	#[cfg(test)]
	pub fn test(start_seconds: f64) -> Self {
		Self {
			test_clock: Some(Arc::new(Mutex::new(start_seconds))),
		}
	}

	/// Seconds since the unix epoch.
	pub fn now(&self) -> f64 {
		#[cfg(test)]
		if let Some(test_clock) = &self.test_clock {
			return *test_clock.lock();
		}

		epoch_seconds(Utc::now())
	}

	#[cfg(test)]
	pub fn advance_time(&self, by_duration: Duration) {
		*self.test_clock().lock() += by_duration.as_secs_f64();
	}

	#[cfg(test)]
	pub fn set_time(&self, seconds: f64) {
		*self.test_clock().lock() = seconds;
	}

	#[cfg(test)]
	fn test_clock(&self) -> &Mutex<f64> {
		self.test_clock.as_ref().expect("Can only be called in test mode.")
	}
}

#[allow(clippy::cast_precision_loss)] // microsecond timestamps stay well below 2^53
fn epoch_seconds(time: DateTime<Utc>) -> f64 {
	time.timestamp_micros() as f64 / 1_000_000.0
}
