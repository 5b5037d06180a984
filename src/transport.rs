use crate::Result;
use reqwest::blocking::Client;

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
	pub status: u16,
	pub body: String,
}

impl Response {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Blocking request/response cycles against the bridge.
///
/// Every call finishes, connection released, before it returns.
pub trait Transport {
	fn get(&self, url: &str) -> Result<Response>;
	fn put(&self, url: &str, body: String) -> Result<Response>;
}

/// [`Transport`] over a reqwest blocking client
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	pub fn new() -> HttpTransport {
		HttpTransport::default()
	}

	pub fn with_client(client: Client) -> HttpTransport {
		HttpTransport { client }
	}
}

fn finish(response: reqwest::blocking::Response) -> Result<Response> {
	let status = response.status().as_u16();
	// Reading the body to the end hands the connection back to the pool
	let body = response.text()?;
	Ok(Response { status, body })
}

impl Transport for HttpTransport {
	fn get(&self, url: &str) -> Result<Response> {
		finish(self.client.get(url).send()?)
	}

	fn put(&self, url: &str, body: String) -> Result<Response> {
		finish(
			self.client
				.put(url)
				.header(reqwest::header::CONTENT_TYPE, "application/json")
				.body(body)
				.send()?,
		)
	}
}
