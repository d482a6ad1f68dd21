use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	/// The hour format is neither 12 nor 24.
	#[error("Hour format must be either 12 or 24, got {0}")]
	InvalidFormat(u32),
	#[error("Expected a whole number, got '{0}'")]
	NotANumber(String),
	#[error("Minute must be between 0 and 59, got {0}")]
	MinuteOutOfRange(i64),
	#[error(transparent)]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
