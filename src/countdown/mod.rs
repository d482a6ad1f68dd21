
use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::TimeDelta;
use chrono::TimeZone;
use chrono::Timelike;

use crate::error::Error;

pub const MAX_MINUTE: u32 = 59;

/// A minute past the hour, between 0 and 59 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetMinute(u32);

impl TargetMinute {
	pub fn value(self) -> u32 {
		self.0
	}
}

impl TryFrom<i64> for TargetMinute {
	type Error = Error;

	fn try_from(value: i64) -> Result<Self, Self::Error> {
		match u32::try_from(value) {
			Ok(minute) if minute <= MAX_MINUTE => Ok(Self(minute)),
			_ => Err(Error::MinuteOutOfRange(value)),
		}
	}
}

impl FromStr for TargetMinute {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s
			.trim()
			.parse::<i64>()
			.map_err(|_| Error::NotANumber(s.to_string()))?;
		Self::try_from(value)
	}
}

impl fmt::Display for TargetMinute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Returns the next instant whose minute is `target` with zeroed seconds.
///
/// The occurrence in the current hour counts as passed as soon as the minute matches, even at
/// second zero, so the result is always strictly after `now`.
pub fn next_occurrence<Tz: TimeZone>(target: TargetMinute, now: &DateTime<Tz>) -> DateTime<Tz> {
	let base = if now.minute() < target.value() {
		now.clone()
	} else {
		now.clone() + TimeDelta::hours(1)
	};
	// Rewind to the top of the hour in absolute time, which stays valid across offset changes.
	let into_hour = TimeDelta::minutes(i64::from(base.minute()))
		+ TimeDelta::seconds(i64::from(base.second()))
		+ TimeDelta::nanoseconds(i64::from(base.nanosecond()));
	base - into_hour + TimeDelta::minutes(i64::from(target.value()))
}

/// Whole seconds from `now` until `target`, truncated. Never negative.
pub fn remaining_seconds<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> u64 {
	let seconds = target.clone().signed_duration_since(now).num_seconds();
	u64::try_from(seconds).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
	pub minutes: u64,
	pub seconds: u64,
}

impl Remaining {
	pub fn from_seconds(total: u64) -> Self {
		Self {
			minutes: total / 60,
			seconds: total % 60,
		}
	}
}
