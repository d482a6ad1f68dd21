use std::fmt;

use anyhow::Context;
use anyhow::Result;
use chrono::DateTime;
use chrono::TimeZone;
use log::debug;

use crate::command::task::Task;
use crate::display::render_screen;
use crate::display::Frame;
use crate::display::FAREWELL;
use crate::settings::Settings;
use crate::util::terminal::Terminal;
use crate::util::timer;

/// Redraws the countdown once per wall-clock second until `task` is stopped, then says goodbye.
///
/// `clock_fn` is sampled at the start of every refresh and again to find the next second
/// boundary.
pub fn countdown<Tz>(
	settings: &Settings,
	terminal: &mut impl Terminal,
	task: &Task,
	clock_fn: impl Fn() -> DateTime<Tz>,
) -> Result<()>
where
	Tz: TimeZone,
	Tz::Offset: fmt::Display,
{
	task.set_running();
	while !task.is_stopped() {
		terminal.clear().context("Unable to clear the screen")?;

		let frame = Frame::at(clock_fn(), settings);
		debug!(
			"Counting down to {} with {}s remaining",
			frame.target.naive_local(),
			frame.remaining_seconds
		);
		terminal
			.write(&render_screen(&frame, settings))
			.context("Unable to draw the countdown")?;

		let delay = timer::until_next_second(&clock_fn());
		if timer::sleep_for(delay, || task.is_stopped()) {
			break;
		}
	}

	terminal
		.write(FAREWELL)
		.context("Unable to print the farewell")?;
	Ok(())
}
