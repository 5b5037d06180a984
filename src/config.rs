use crate::{Error, Result};

/// Full base URL, e.g. `http://192.168.1.2/api/<username>/`
pub const API_URL_VAR: &str = "HUE_API_URL";
/// Bridge host, used together with [`USERNAME_VAR`]
pub const BRIDGE_VAR: &str = "HUE_BRIDGE";
pub const USERNAME_VAR: &str = "HUE_USERNAME";

/// Where the bridge API lives
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	/// Base URL of the bridge API, always ending in `/`
	pub api_url: String,
}

impl Config {
	pub fn new(api_url: &str) -> Result<Config> {
		let api_url = api_url.trim();
		// reqwest is built without TLS
		if !api_url.starts_with("http://") {
			return Err(Error::Config(format!("not an http url: {:?}", api_url)));
		}
		let mut api_url = api_url.to_string();
		if !api_url.ends_with('/') {
			api_url.push('/');
		}
		Ok(Config { api_url })
	}

	pub fn for_bridge(host: &str, username: &str) -> Result<Config> {
		if host.is_empty() || username.is_empty() {
			return Err(Error::Config("bridge host and username must be set".into()));
		}
		Config::new(&format!("http://{}/api/{}/", host, username))
	}

	/// Read the bridge location from the environment, loading `.env` first.
	pub fn from_env() -> Result<Config> {
		dotenv::dotenv().ok();
		Config::from_lookup(|key| dotenv::var(key).ok())
	}

	fn from_lookup<F>(lookup: F) -> Result<Config>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(url) = lookup(API_URL_VAR) {
			return Config::new(&url);
		}
		match (lookup(BRIDGE_VAR), lookup(USERNAME_VAR)) {
			(Some(host), Some(username)) => Config::for_bridge(&host, &username),
			_ => Err(Error::Config(format!(
				"set {} or both {} and {}",
				API_URL_VAR, BRIDGE_VAR, USERNAME_VAR
			))),
		}
	}
}
