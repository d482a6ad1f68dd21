use std::io;
use std::io::BufRead;
use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::Clear;
use crossterm::terminal::ClearType;

/// Screen the timer draws on.
pub trait Terminal {
	fn clear(&mut self) -> io::Result<()>;
	fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Source of line-oriented user answers.
pub trait Input {
	/// Shows `message` and returns the next line without its line ending.
	fn prompt(&mut self, message: &str) -> io::Result<String>;
}

pub struct NativeTerminal;

impl Terminal for NativeTerminal {
	fn clear(&mut self) -> io::Result<()> {
		execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
	}

	fn write(&mut self, text: &str) -> io::Result<()> {
		let mut stdout = io::stdout().lock();
		stdout.write_all(text.as_bytes())?;
		stdout.flush()
	}
}

pub struct StdinInput;

impl Input for StdinInput {
	fn prompt(&mut self, message: &str) -> io::Result<String> {
		print!("{message}");
		io::stdout().flush()?;
		let mut line = String::new();
		if io::stdin().lock().read_line(&mut line)? == 0 {
			return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
		}
		let len = line.trim_end_matches(['\r', '\n']).len();
		line.truncate(len);
		Ok(line)
	}
}
