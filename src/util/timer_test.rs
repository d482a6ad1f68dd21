use std::cell::Cell;
use std::time::Duration;
use std::time::Instant;

use chrono::TimeDelta;
use chrono::TimeZone;
use chrono::Utc;

use super::timer::sleep_for;
use super::timer::until_next_second;
use super::timer::CountdownTimer;

#[test]
fn until_next_second_on_boundary() {
	let now = Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap();
	assert_eq!(until_next_second(&now), Duration::from_secs(1));
}

#[test]
fn until_next_second_mid_second() {
	let now = Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap() + TimeDelta::milliseconds(250);
	assert_eq!(until_next_second(&now), Duration::from_millis(750));
}

#[test]
fn countdown_timer_passes() {
	let timer = CountdownTimer::new(Duration::ZERO);
	assert!(timer.passed());
	let timer = CountdownTimer::new(Duration::from_secs(60));
	assert!(!timer.passed());
	assert!(timer.remaining() <= Duration::from_secs(60));
}

#[test]
fn sleep_for_full_duration() {
	let start = Instant::now();
	assert!(!sleep_for(Duration::from_millis(20), || false));
	assert!(start.elapsed() >= Duration::from_millis(20));
}

#[test]
fn sleep_for_stops_early() {
	let start = Instant::now();
	assert!(sleep_for(Duration::from_secs(10), || true));
	assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn sleep_for_notices_stop_between_slices() {
	let checks = Cell::new(0);
	let start = Instant::now();
	let stopped = sleep_for(Duration::from_secs(10), || {
		checks.set(checks.get() + 1);
		checks.get() > 2
	});
	assert!(stopped);
	assert!(start.elapsed() < Duration::from_secs(1));
}
