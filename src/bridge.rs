use crate::groups::{GroupLights, GroupState, SetLightsCommand};
use crate::lights::LightState;
use crate::transport::{HttpTransport, Response, Transport};
use crate::{Config, Error, Result};

/// The group switched by [`Bridge::set_lights`]
pub const DEFAULT_GROUP: u32 = 5;

/// A Hue bridge reachable under `api_url`.
///
/// The bridge owns its transport; requests go out one at a time.
#[derive(Debug)]
pub struct Bridge<T = HttpTransport> {
	api_url: String,
	transport: T,
}

impl Bridge<HttpTransport> {
	pub fn from_config(config: &Config) -> Bridge<HttpTransport> {
		Bridge::with_transport(config, HttpTransport::new())
	}
}

impl<T: Transport> Bridge<T> {
	pub fn with_transport(config: &Config, transport: T) -> Bridge<T> {
		Bridge {
			api_url: config.api_url.clone(),
			transport,
		}
	}

	pub fn api_url(&self) -> &str {
		&self.api_url
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.api_url, path)
	}

	fn get(&self, path: &str) -> Result<Response> {
		let response = self.transport.get(&self.url(path))?;
		if !response.is_success() {
			warn!("GET {} answered {}", path, response.status);
			return Err(Error::Status(response.status));
		}
		Ok(response)
	}

	/// Switch [`DEFAULT_GROUP`] on or off, returning the HTTP status.
	pub fn set_lights(&self, on: bool) -> Result<u16> {
		self.set_group(DEFAULT_GROUP, on)
	}

	/// Switch every light of `group_id`.
	///
	/// Non-2xx statuses are returned as they are, not as errors.
	pub fn set_group(&self, group_id: u32, on: bool) -> Result<u16> {
		info!("Setting lights of group {} to: {}", group_id, on);
		let body = SetLightsCommand { on }.to_json()?;
		let result = self
			.transport
			.put(&self.url(&format!("groups/{}/action", group_id)), body);
		match &result {
			Ok(response) => info!("Http result: {}", response.status),
			Err(e) => warn!("Http result: {} ({})", e.code(), e),
		}
		Ok(result?.status)
	}

	pub fn get_light(&self, id: u32) -> Result<LightState> {
		let response = self.get(&format!("lights/{}", id))?;
		let light = LightState::from_json(id, &response.body)?;
		info!("{}", light);
		Ok(light)
	}

	pub fn get_group(&self, group_id: u32) -> Result<GroupState> {
		let response = self.get(&format!("groups/{}", group_id))?;
		GroupState::from_json(group_id, &response.body)
	}

	/// Read a group, then each of its lights in member order.
	pub fn get_group_lights(&self, group_id: u32) -> Result<GroupLights> {
		let group = self.get_group(group_id)?;
		info!("{}", group.name);
		let mut lights = Vec::with_capacity(group.lights.len());
		for &light_id in &group.lights {
			info!("{}", light_id);
			lights.push(self.get_light(light_id)?);
		}
		Ok(GroupLights { group, lights })
	}
}
