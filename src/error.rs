use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while talking to the bridge
#[derive(Debug)]
pub enum Error {
	/// The request could not be sent or no response arrived
	Transport(Box<dyn std::error::Error + Send + Sync>),
	/// The bridge answered a read with a non-2xx status
	Status(u16),
	/// The body was not JSON or lacked an expected field
	Json(serde_json::Error),
	/// The bridge URL is missing or unusable
	Config(String),
}

impl Error {
	/// Integer code in the style of embedded HTTP clients.
	///
	/// Transport failures map to -1, HTTP failures to their status.
	pub fn code(&self) -> i32 {
		match self {
			Error::Transport(_) => -1,
			Error::Status(status) => i32::from(*status),
			Error::Json(_) => -2,
			Error::Config(_) => -3,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::Transport(e) => write!(f, "transport error: {}", e),
			Error::Status(status) => write!(f, "bridge answered with status {}", status),
			Error::Json(e) => write!(f, "malformed response: {}", e),
			Error::Config(msg) => write!(f, "configuration error: {}", msg),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Transport(e) => Some(e.as_ref()),
			Error::Json(e) => Some(e),
			_ => None,
		}
	}
}

impl From<reqwest::Error> for Error {
	fn from(e: reqwest::Error) -> Error {
		Error::Transport(Box::new(e))
	}
}

impl From<serde_json::Error> for Error {
	fn from(e: serde_json::Error) -> Error {
		Error::Json(e)
	}
}
