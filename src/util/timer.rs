use std::thread;
use std::time::Duration;
use std::time::Instant;

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Timelike;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

// Longest stretch slept without checking for a stop request.
const SLICE: Duration = Duration::from_millis(50);

pub struct CountdownTimer {
	start: Instant,
	duration: Duration,
}

impl CountdownTimer {
	pub fn new(duration: Duration) -> Self {
		Self {
			start: Instant::now(),
			duration,
		}
	}

	pub fn remaining(&self) -> Duration {
		self.duration.saturating_sub(self.start.elapsed())
	}

	pub fn passed(&self) -> bool {
		self.remaining().is_zero()
	}
}

/// Time left in the current wall-clock second of `now`.
pub fn until_next_second<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
	// Leap seconds report nanoseconds past one second.
	let nanos = now.nanosecond() % NANOS_PER_SECOND;
	Duration::from_nanos(u64::from(NANOS_PER_SECOND - nanos))
}

/// Sleeps for `duration` unless `is_stopped_fn` turns true first. Returns whether it was stopped.
pub fn sleep_for(duration: Duration, is_stopped_fn: impl Fn() -> bool) -> bool {
	let timer = CountdownTimer::new(duration);
	loop {
		if is_stopped_fn() {
			return true;
		}
		if timer.passed() {
			return false;
		}
		thread::sleep(timer.remaining().min(SLICE));
	}
}
