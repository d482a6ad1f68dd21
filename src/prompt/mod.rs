
use log::debug;
use log::info;

use crate::countdown::TargetMinute;
use crate::display::thin_line;
use crate::display::INDENT;
use crate::error::Result;
use crate::settings::Settings;
use crate::time_format::format_example;
use crate::time_format::HourFormat;
use crate::util::terminal::Input;
use crate::util::terminal::Terminal;

/// Characters stripped from both ends of every answer before it is parsed.
const STRIP_CHARS: [char; 5] = [' ', '.', ',', '"', '\''];

// Hours shown in the preview after a minute is entered.
const PREVIEW_HOURS: [u32; 3] = [1, 2, 3];

const MINUTE_QUESTION: &str = "Please enter the number of minutes you'd like to count down to: ";
const MINUTE_HINT: &str =
	"The number of minutes must be a whole number between 0 and 59 (e.g., 0, 3, 25, 59).";
const HOUR_QUESTION: &str = "Type \"12\" for 12-hour format, or \"24\" for 24-hour format: ";
const CONFIRM_QUESTION: &str = "Is this correct? Please enter 'y' or 'n': ";

/// Removes spaces and stray punctuation (`.`, `,`, `"`, `'`) from both ends.
pub fn clean_text(text: &str) -> &str {
	text.trim_matches(STRIP_CHARS)
}

pub fn intro_text() -> String {
	[
		"Welcome to Visual Countdown Timer!",
		"This timer counts down to a set number of minutes past each hour.",
		"For example, if you enter \"25\", it will count down to 1:25, 2:25, etc.",
		"",
		"",
	]
	.join("\n")
}

/// `01:25 | 02:25 | 03:25 | etc.` for minute 25.
pub fn minute_preview(minute: TargetMinute) -> String {
	let mut parts: Vec<String> = PREVIEW_HOURS
		.iter()
		.map(|hour| format!("{hour:02}:{:02}", minute.value()))
		.collect();
	parts.push("etc.".to_string());
	parts.join(" | ")
}

/// Asks for y/n until one of them is given.
pub fn confirm(input: &mut impl Input, terminal: &mut impl Terminal) -> Result<bool> {
	loop {
		let raw = input.prompt(CONFIRM_QUESTION)?;
		match clean_text(&raw).to_lowercase().as_str() {
			"y" => return Ok(true),
			"n" => return Ok(false),
			_ => {
				debug!("Invalid confirmation: {raw:?}");
				terminal.write("\nInvalid answer: Please enter 'y' for yes, or 'n' for no.\n")?;
			}
		}
	}
}

/// Asks for the minute past the hour to count down to, until one is entered and confirmed.
pub fn prompt_target_minute(
	input: &mut impl Input,
	terminal: &mut impl Terminal,
) -> Result<TargetMinute> {
	loop {
		let raw = input.prompt(MINUTE_QUESTION)?;
		let minute = match clean_text(&raw).parse::<TargetMinute>() {
			Ok(minute) => minute,
			Err(err) => {
				debug!("Rejected minute {raw:?}: {err}");
				terminal.write(&format!("\nError: {MINUTE_HINT}\n\n"))?;
				continue;
			}
		};

		terminal.write(&format!(
			"\nYou entered {minute} minutes. The timer will count down to:\n{}\n\n",
			minute_preview(minute)
		))?;
		if confirm(input, terminal)? {
			info!("Counting down to minute {minute}");
			return Ok(minute);
		}
		terminal.write("\n")?;
	}
}

/// Asks whether times should show as 12-hour or 24-hour, until one is entered and confirmed.
pub fn prompt_hour_format(
	input: &mut impl Input,
	terminal: &mut impl Terminal,
) -> Result<HourFormat> {
	let thin = thin_line();
	terminal.write(&format!(
		"\nWould you like the time to display as 12 hours or 24 hours?\n\
		{INDENT}{thin}\n\
		{INDENT}12 hours looks like this: {}\n\
		{INDENT}24 hours looks like this: {}\n\
		{INDENT}{thin}\n",
		format_example(HourFormat::Twelve),
		format_example(HourFormat::TwentyFour),
	))?;

	loop {
		let raw = input.prompt(HOUR_QUESTION)?;
		let cleaned = clean_text(&raw);
		let format = match cleaned.parse::<HourFormat>() {
			Ok(format) => format,
			Err(err) => {
				debug!("Rejected hour format {raw:?}: {err}");
				terminal.write(&format!(
					"\nError: please enter either 12 or 24. You typed: '{cleaned}'\n\n"
				))?;
				continue;
			}
		};

		terminal.write(&format!(
			"\nYou chose {format}-hour time. Times will look like this: {}\n\n",
			format_example(format)
		))?;
		if confirm(input, terminal)? {
			info!("Using {format}-hour time");
			return Ok(format);
		}
		terminal.write("\n")?;
	}
}

/// Collects both settings, asking only for those not already given.
pub fn prompt_settings(
	input: &mut impl Input,
	terminal: &mut impl Terminal,
	target_minute: Option<TargetMinute>,
	hour_format: Option<HourFormat>,
) -> Result<Settings> {
	let target_minute = match target_minute {
		Some(minute) => minute,
		None => {
			terminal.write(&intro_text())?;
			prompt_target_minute(input, terminal)?
		}
	};
	let hour_format = match hour_format {
		Some(format) => format,
		None => prompt_hour_format(input, terminal)?,
	};
	Ok(Settings {
		target_minute,
		hour_format,
	})
}
