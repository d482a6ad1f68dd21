/// Number of `#` and `.` characters between the brackets.
pub const BAR_WIDTH: usize = 30;

const FILLED: char = '#';
const EMPTY: char = '.';

/// Number of filled cells for the remaining time. Each cell is worth about two minutes.
///
/// Leftover seconds round the minute count up, and the halving rounds half up, so 16:01
/// remaining counts as 17 minutes and fills 9 cells.
pub fn filled_count(remaining_seconds: u64) -> u64 {
	let minutes = remaining_seconds.div_ceil(60);
	minutes.div_ceil(2)
}

/// Renders `[###...]` where `#` is remaining time and `.` is elapsed time.
pub fn render_bar(remaining_seconds: u64, width: usize) -> String {
	let filled = usize::try_from(filled_count(remaining_seconds))
		.unwrap_or(usize::MAX)
		.min(width);
	let mut bar = String::with_capacity(width + 2);
	bar.push('[');
	bar.extend(std::iter::repeat(FILLED).take(filled));
	bar.extend(std::iter::repeat(EMPTY).take(width - filled));
	bar.push(']');
	bar
}
