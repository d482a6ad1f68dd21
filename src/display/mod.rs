#[cfg(test)]
mod test;

use std::fmt;

use chrono::DateTime;
use chrono::TimeZone;

use crate::countdown;
use crate::countdown::Remaining;
use crate::progress;
use crate::settings::Settings;
use crate::time_format::format_date;
use crate::time_format::format_time;

pub const LINE_LENGTH: usize = 32;
pub const INDENT: &str = "  ";

pub const TITLE: &str = "Visual Countdown Timer";
pub const FAREWELL: &str = "\n\nTimer stopped. Thank you for using Visual Countdown Timer!\n";

pub fn thick_line() -> String {
	"=".repeat(LINE_LENGTH)
}

pub fn thin_line() -> String {
	"-".repeat(LINE_LENGTH)
}

pub fn title_block() -> String {
	let thick = thick_line();
	format!("{thick}\n{TITLE}\nPress Ctrl + C to exit.\n{thick}\n\n")
}

pub fn minute_label(minutes: u64) -> &'static str {
	if minutes == 1 {
		"minute"
	} else {
		"minutes"
	}
}

pub fn second_label(seconds: u64) -> &'static str {
	if seconds == 1 {
		"second"
	} else {
		"seconds"
	}
}

/// One refresh worth of countdown state, sampled at `now`.
pub struct Frame<Tz: TimeZone> {
	pub now: DateTime<Tz>,
	pub target: DateTime<Tz>,
	pub remaining_seconds: u64,
}

impl<Tz: TimeZone> Frame<Tz> {
	pub fn at(now: DateTime<Tz>, settings: &Settings) -> Self {
		let target = countdown::next_occurrence(settings.target_minute, &now);
		let remaining_seconds = countdown::remaining_seconds(&target, &now);
		Self {
			now,
			target,
			remaining_seconds,
		}
	}
}

/// Lays out the whole screen for `frame`.
pub fn render_screen<Tz>(frame: &Frame<Tz>, settings: &Settings) -> String
where
	Tz: TimeZone,
	Tz::Offset: fmt::Display,
{
	let remaining = Remaining::from_seconds(frame.remaining_seconds);
	let thin = thin_line();
	let lines = [
		format_date(&frame.now),
		format!(
			"Current Time: {}",
			format_time(&frame.now, settings.hour_format)
		),
		String::new(),
		thin.clone(),
		format!(
			"Countdown until {}:",
			format_time(&frame.target, settings.hour_format)
		),
		thin,
		format!(
			"{INDENT}{:02} {}",
			remaining.minutes,
			minute_label(remaining.minutes)
		),
		format!(
			"{INDENT}{:02} {}",
			remaining.seconds,
			second_label(remaining.seconds)
		),
		progress::render_bar(frame.remaining_seconds, progress::BAR_WIDTH),
	];

	let mut screen = title_block();
	for line in lines {
		screen.push_str(&line);
		screen.push('\n');
	}
	screen
}
