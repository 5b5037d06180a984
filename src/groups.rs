use crate::lights::LightState;
use crate::Result;
use serde::de::{self, Deserializer};

/// Body of `PUT groups/<id>/action`
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SetLightsCommand {
	pub on: bool,
}

impl SetLightsCommand {
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

/// Name and members of a light group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupState {
	pub id: u32,
	pub name: String,
	/// Member light ids in bridge order
	pub lights: Vec<u32>,
}

#[derive(Deserialize, Debug)]
struct GroupResponse {
	name: String,
	#[serde(deserialize_with = "light_ids")]
	lights: Vec<u32>,
}

/// The bridge lists members as `"3"`; bare numbers are taken as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum LightId {
	Number(u32),
	Text(String),
}

fn light_ids<'de, D>(deserializer: D) -> std::result::Result<Vec<u32>, D::Error>
where
	D: Deserializer<'de>,
{
	let ids: Vec<LightId> = serde::Deserialize::deserialize(deserializer)?;
	ids.into_iter()
		.map(|id| match id {
			LightId::Number(n) => Ok(n),
			LightId::Text(s) => s
				.parse()
				.map_err(|_| <D::Error as de::Error>::custom(format!("invalid light id {:?}", s))),
		})
		.collect()
}

impl GroupState {
	pub fn from_json(id: u32, body: &str) -> Result<GroupState> {
		let response: GroupResponse = serde_json::from_str(body)?;
		Ok(GroupState {
			id,
			name: response.name,
			lights: response.lights,
		})
	}
}

/// A group together with the state of each member, in member order
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLights {
	pub group: GroupState,
	pub lights: Vec<LightState>,
}
