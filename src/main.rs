#![warn(clippy::pedantic)]

mod command;
mod countdown;
mod display;
mod error;
mod progress;
mod prompt;
mod settings;
mod time_format;
mod util;

use std::io;
use std::io::Write;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use chrono::Utc;
use clap::ArgAction;
use clap::Parser;
use log::info;
use log::LevelFilter;

use crate::command::Task;
use crate::countdown::TargetMinute;
use crate::display::FAREWELL;
use crate::time_format::HourFormat;
use crate::util::terminal::NativeTerminal;
use crate::util::terminal::StdinInput;
use crate::util::terminal::Terminal;

/// Counts down to a chosen minute past every hour.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
	/// Minute past the hour to count down to, from 0 to 59. Asked for when not given.
	#[arg(long, value_parser = parse_minute)]
	minute: Option<TargetMinute>,

	/// Show times in 12-hour or 24-hour format. Asked for when not given.
	#[arg(long, value_parser = parse_hour_format)]
	hour_format: Option<HourFormat>,

	/// Log more details to stderr. Repeat for more.
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

fn parse_minute(value: &str) -> Result<TargetMinute, error::Error> {
	prompt::clean_text(value).parse()
}

fn parse_hour_format(value: &str) -> Result<HourFormat, error::Error> {
	prompt::clean_text(value).parse()
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let task = Arc::new(Task::new());
	let task_handler = task.clone();
	ctrlc::set_handler(move || {
		info!("Interrupt received");
		if task_handler.is_running() {
			task_handler.stop();
			return;
		}
		// Still blocked on a prompt, so nothing else will print the farewell.
		print!("{FAREWELL}");
		let _ = io::stdout().flush();
		process::exit(0);
	})
	.context("Unable to install the Ctrl+C handler")?;

	let tz = time_format::local_timezone();
	let mut terminal = NativeTerminal;
	terminal
		.clear()
		.context("Unable to clear the screen")?;
	terminal.write(&display::title_block())?;

	let settings = prompt::prompt_settings(
		&mut StdinInput,
		&mut terminal,
		cli.minute,
		cli.hour_format,
	)
	.context("Unable to read the timer settings")?;
	info!(
		"Counting down to minute {} in {}-hour time",
		settings.target_minute, settings.hour_format
	);

	command::countdown(&settings, &mut terminal, &task, || {
		Utc::now().with_timezone(&tz)
	})
}
