use crate::Result;
use std::fmt;

/// Name and on/off state of a single light
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LightState {
	pub id: u32,
	pub name: String,
	pub on: bool,
}

/// Fields we read from `GET lights/<id>`; everything else is ignored
#[derive(Deserialize, Debug)]
struct LightResponse {
	name: String,
	state: StateResponse,
}

#[derive(Deserialize, Debug)]
struct StateResponse {
	on: bool,
}

impl LightState {
	/// Parse a bridge answer for light `id`.
	///
	/// A missing or mistyped `name` or `state.on` is an error.
	pub fn from_json(id: u32, body: &str) -> Result<LightState> {
		let response: LightResponse = serde_json::from_str(body)?;
		Ok(LightState {
			id,
			name: response.name,
			on: response.state.on,
		})
	}
}

impl fmt::Display for LightState {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Light: {} status: {}", self.name, self.on)
	}
}
