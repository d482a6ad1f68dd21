use crate::countdown::TargetMinute;
use crate::time_format::HourFormat;

/// The two choices made before the timer starts. Fixed for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
	pub target_minute: TargetMinute,
	pub hour_format: HourFormat,
}
