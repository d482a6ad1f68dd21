use chrono::TimeZone;
use chrono::Utc;

use super::minute_label;
use super::render_screen;
use super::second_label;
use super::thick_line;
use super::thin_line;
use super::title_block;
use super::Frame;
use crate::countdown::TargetMinute;
use crate::settings::Settings;
use crate::time_format::HourFormat;

fn settings(minute: i64, hour_format: HourFormat) -> Settings {
	Settings {
		target_minute: TargetMinute::try_from(minute).unwrap(),
		hour_format,
	}
}

#[test]
fn dividers() {
	assert_eq!(thick_line(), "=".repeat(32));
	assert_eq!(thin_line(), "-".repeat(32));
	assert!(title_block().starts_with("================================\nVisual Countdown Timer\n"));
}

#[test]
fn labels() {
	assert_eq!(minute_label(1), "minute");
	assert_eq!(minute_label(0), "minutes");
	assert_eq!(minute_label(16), "minutes");
	assert_eq!(second_label(1), "second");
	assert_eq!(second_label(59), "seconds");
}

#[test]
fn frame_before_top_of_hour() {
	let now = Utc.with_ymd_and_hms(2024, 3, 14, 14, 59, 30).unwrap();
	let frame = Frame::at(now, &settings(0, HourFormat::TwentyFour));
	assert_eq!(frame.target, Utc.with_ymd_and_hms(2024, 3, 14, 15, 0, 0).unwrap());
	assert_eq!(frame.remaining_seconds, 30);
}

#[test]
fn full_screen_twenty_four_hour() {
	let settings = settings(0, HourFormat::TwentyFour);
	let now = Utc.with_ymd_and_hms(2024, 3, 14, 14, 59, 30).unwrap();
	let screen = render_screen(&Frame::at(now, &settings), &settings);
	let expected = "\
================================
Visual Countdown Timer
Press Ctrl + C to exit.
================================

March 14, 2024
Current Time: 14:59 UTC

--------------------------------
Countdown until 15:00 UTC:
--------------------------------
  00 minutes
  30 seconds
[#.............................]
";
	assert_eq!(screen, expected);
}

#[test]
fn full_screen_twelve_hour_singular_labels() {
	let settings = settings(25, HourFormat::Twelve);
	let now = Utc.with_ymd_and_hms(2024, 3, 14, 13, 23, 59).unwrap();
	let screen = render_screen(&Frame::at(now, &settings), &settings);
	assert!(screen.contains("Current Time: 1:23pm UTC\n"));
	assert!(screen.contains("Countdown until 1:25pm UTC:\n"));
	assert!(screen.contains("\n  01 minute\n  01 second\n"));
	assert!(screen.ends_with("[#.............................]\n"));
}
