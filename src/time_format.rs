use std::env;
use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveTime;
use chrono::TimeZone;
use log::debug;
use log::info;
use log::warn;

use crate::error::Error;

const TWELVE_HOUR: &str = "%-I:%M%P";
const TWENTY_FOUR_HOUR: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourFormat {
	/// `2:05pm`, hour not padded.
	Twelve,
	/// `14:05`.
	TwentyFour,
}

impl HourFormat {
	fn pattern(self) -> &'static str {
		match self {
			HourFormat::Twelve => TWELVE_HOUR,
			HourFormat::TwentyFour => TWENTY_FOUR_HOUR,
		}
	}

	pub fn hours(self) -> u32 {
		match self {
			HourFormat::Twelve => 12,
			HourFormat::TwentyFour => 24,
		}
	}
}

impl TryFrom<u32> for HourFormat {
	type Error = Error;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		match value {
			12 => Ok(HourFormat::Twelve),
			24 => Ok(HourFormat::TwentyFour),
			_ => Err(Error::InvalidFormat(value)),
		}
	}
}

impl FromStr for HourFormat {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s
			.trim()
			.parse::<u32>()
			.map_err(|_| Error::NotANumber(s.to_string()))?;
		Self::try_from(value)
	}
}

impl fmt::Display for HourFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.hours())
	}
}

/// Formats the time of day followed by the zone abbreviation of `moment`, e.g. `2:05pm UTC`.
pub fn format_time<Tz>(moment: &DateTime<Tz>, format: HourFormat) -> String
where
	Tz: TimeZone,
	Tz::Offset: fmt::Display,
{
	let time = moment.format(format.pattern());
	let zone = moment.format("%Z");
	format!("{time} {zone}")
}

/// Formats the calendar date, e.g. `March 14, 2024`.
pub fn format_date<Tz>(moment: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: fmt::Display,
{
	moment.format("%B %d, %Y").to_string()
}

/// Sample rendering of 15:52 used to explain the choice to the user.
pub fn format_example(format: HourFormat) -> String {
	NaiveTime::from_hms_opt(15, 52, 0)
		.map(|time| time.format(format.pattern()).to_string())
		.unwrap_or_default()
}

/// Picks the zone `%Z` is printed in. `TZ` wins over the OS setting, like the C library's
/// local time. Anything unparseable falls back to UTC.
pub fn resolve_timezone(tz_env: Option<&str>, os_name: Option<String>) -> chrono_tz::Tz {
	if let Some(value) = tz_env {
		let name = value.strip_prefix(':').unwrap_or(value);
		match name.parse::<chrono_tz::Tz>() {
			Ok(tz) => {
				info!("Using timezone {name} from TZ");
				return tz;
			}
			Err(err) => warn!("Ignoring TZ={value}: {err}"),
		}
	}
	let Some(name) = os_name else {
		warn!("Unable to detect the local timezone, using UTC");
		return chrono_tz::Tz::UTC;
	};
	match name.parse::<chrono_tz::Tz>() {
		Ok(tz) => {
			info!("Using timezone {name}");
			tz
		}
		Err(err) => {
			warn!("Unknown timezone {name}, using UTC: {err}");
			chrono_tz::Tz::UTC
		}
	}
}

/// Resolves the local zone from `TZ`, then the OS.
pub fn local_timezone() -> chrono_tz::Tz {
	let tz_env = env::var("TZ").ok().filter(|value| !value.is_empty());
	let os_name = match iana_time_zone::get_timezone() {
		Ok(name) => Some(name),
		Err(err) => {
			debug!("No OS timezone: {err}");
			None
		}
	};
	resolve_timezone(tz_env.as_deref(), os_name)
}
