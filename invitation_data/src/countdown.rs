use chrono::NaiveDateTime;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// How often the countdown on the page should be recomputed, in milliseconds
pub const TICK_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
	pub days: u64,
	pub hours: u8,
	pub minutes: u8,
	pub seconds: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Remaining {
	Counting(Countdown),
	// once we're here, nobody needs to keep ticking
	Elapsed,
}

impl Countdown {
	pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

	/// The `(label, value)` pairs shown under the countdown, with the value zero-padded to two
	/// digits
	#[must_use]
	pub fn units(&self) -> [(&'static str, String); 4] {
		[
			("Hari", format!("{:02}", self.days)),
			("Jam", format!("{:02}", self.hours)),
			("Menit", format!("{:02}", self.minutes)),
			("Detik", format!("{:02}", self.seconds)),
		]
	}

	#[must_use]
	pub fn as_millis(&self) -> i64 {
		self.days as i64 * DAY_MS
			+ i64::from(self.hours) * HOUR_MS
			+ i64::from(self.minutes) * MINUTE_MS
			+ i64::from(self.seconds) * SECOND_MS
	}
}

impl Remaining {
	/// Splits `distance` (in milliseconds) into whole days, hours, minutes, and seconds. Anything
	/// that isn't strictly in the future counts as elapsed.
	#[must_use]
	pub fn from_millis(distance: i64) -> Self {
		if distance <= 0 {
			return Self::Elapsed;
		}

		// all of these are non-negative and below their unit's bound, so the casts can't truncate
		Self::Counting(Countdown {
			days: (distance / DAY_MS) as u64,
			hours: ((distance % DAY_MS) / HOUR_MS) as u8,
			minutes: ((distance % HOUR_MS) / MINUTE_MS) as u8,
			seconds: ((distance % MINUTE_MS) / SECOND_MS) as u8,
		})
	}

	#[must_use]
	pub fn countdown(&self) -> Countdown {
		match self {
			Self::Counting(countdown) => *countdown,
			Self::Elapsed => Countdown::ZERO,
		}
	}

	#[must_use]
	pub fn is_elapsed(&self) -> bool {
		matches!(self, Self::Elapsed)
	}
}

#[must_use]
pub fn compute_remaining(target: NaiveDateTime, now: NaiveDateTime) -> Remaining {
	Remaining::from_millis((target - now).num_milliseconds())
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{NaiveDate, TimeDelta};
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2026, 1, day)
			.and_then(|d| d.and_hms_opt(h, m, s))
			.unwrap()
	}

	#[test]
	fn one_day_before() {
		assert_eq!(
			compute_remaining(at(31, 8, 0, 0), at(30, 8, 0, 0)),
			Remaining::Counting(Countdown { days: 1, hours: 0, minutes: 0, seconds: 0 })
		);
	}

	#[test]
	fn every_unit_is_split_out() {
		assert_eq!(
			compute_remaining(at(31, 8, 0, 0), at(28, 4, 27, 18)).countdown(),
			Countdown { days: 3, hours: 3, minutes: 32, seconds: 42 }
		);
	}

	#[test]
	fn partial_seconds_are_dropped() {
		let target = at(31, 8, 0, 0);
		let now = target - TimeDelta::milliseconds(1999);
		assert_eq!(compute_remaining(target, now).countdown(), Countdown { seconds: 1, ..Countdown::ZERO });

		// still counting, just under a second left
		let now = target - TimeDelta::milliseconds(1);
		assert_eq!(compute_remaining(target, now), Remaining::Counting(Countdown::ZERO));
	}

	#[test]
	fn reaching_the_target_is_elapsed() {
		let target = at(31, 8, 0, 0);
		assert_eq!(compute_remaining(target, target), Remaining::Elapsed);
		assert_eq!(compute_remaining(target, at(31, 8, 0, 1)), Remaining::Elapsed);
		assert_eq!(compute_remaining(target, at(31, 20, 0, 0)).countdown(), Countdown::ZERO);
		assert!(compute_remaining(target, target).is_elapsed());
	}

	#[test]
	fn units_are_padded() {
		let countdown = Countdown { days: 124, hours: 5, minutes: 0, seconds: 59 };
		assert_eq!(countdown.units(), [
			("Hari", "124".to_string()),
			("Jam", "05".to_string()),
			("Menit", "00".to_string()),
			("Detik", "59".to_string()),
		]);
	}

	proptest! {
		#[test]
		fn reconstructs_to_the_second(distance in 1i64..=(400 * DAY_MS)) {
			let countdown = Remaining::from_millis(distance).countdown();

			prop_assert!(countdown.hours < 24);
			prop_assert!(countdown.minutes < 60);
			prop_assert!(countdown.seconds < 60);
			prop_assert_eq!(countdown.as_millis(), distance - distance % SECOND_MS);
		}

		#[test]
		fn past_targets_are_all_zero(behind in 0i64..=(400 * DAY_MS)) {
			let remaining = Remaining::from_millis(-behind);
			prop_assert_eq!(remaining, Remaining::Elapsed);
			prop_assert_eq!(remaining.countdown(), Countdown::ZERO);
		}
	}
}
