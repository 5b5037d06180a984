use hue_switch::{Bridge, Config, Error, Response, Result, Transport};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

#[derive(Debug, Clone, PartialEq)]
enum Request {
	Get(String),
	Put(String, String),
}

/// Answers from a fixed table and remembers what was asked
#[derive(Default)]
struct FakeTransport {
	answers: HashMap<String, Response>,
	refuse: bool,
	requests: RefCell<Vec<Request>>,
}

impl FakeTransport {
	fn answer(mut self, url: &str, status: u16, body: &str) -> FakeTransport {
		self.answers.insert(
			url.to_string(),
			Response { status, body: body.to_string() },
		);
		self
	}

	fn refusing() -> FakeTransport {
		FakeTransport { refuse: true, ..FakeTransport::default() }
	}

	fn respond(&self, url: &str) -> Result<Response> {
		if self.refuse {
			return Err(Error::Transport(Box::new(io::Error::new(
				io::ErrorKind::ConnectionRefused,
				"connection refused",
			))));
		}
		Ok(self.answers.get(url).cloned().unwrap_or(Response {
			status: 404,
			body: String::new(),
		}))
	}
}

impl Transport for FakeTransport {
	fn get(&self, url: &str) -> Result<Response> {
		self.requests.borrow_mut().push(Request::Get(url.to_string()));
		self.respond(url)
	}

	fn put(&self, url: &str, body: String) -> Result<Response> {
		self.requests.borrow_mut().push(Request::Put(url.to_string(), body));
		self.respond(url)
	}
}

const API: &str = "http://bridge/api/user/";

fn bridge(transport: FakeTransport) -> Bridge<FakeTransport> {
	let _ = env_logger::builder().is_test(true).try_init();
	Bridge::with_transport(&Config::new(API).unwrap(), transport)
}

fn url(path: &str) -> String {
	format!("{}{}", API, path)
}

fn requests(bridge: &Bridge<FakeTransport>) -> Vec<Request> {
	bridge.transport().requests.borrow().clone()
}

#[test]
fn set_lights_puts_on_to_group_five() {
	for &on in &[true, false] {
		let bridge = bridge(FakeTransport::default().answer(&url("groups/5/action"), 200, "[]"));
		assert_eq!(bridge.set_lights(on).unwrap(), 200);
		let requests = requests(&bridge);
		assert_eq!(requests.len(), 1);
		match &requests[0] {
			Request::Put(target, body) => {
				assert_eq!(target, &url("groups/5/action"));
				let body: serde_json::Value = serde_json::from_str(body).unwrap();
				assert_eq!(body, serde_json::json!({ "on": on }));
			}
			other => panic!("expected a PUT, got {:?}", other),
		}
	}
}

#[test]
fn set_lights_returns_api_failure_status() {
	let bridge = bridge(FakeTransport::default().answer(&url("groups/5/action"), 403, "[]"));
	assert_eq!(bridge.set_lights(true).unwrap(), 403);
}

#[test]
fn set_lights_connection_failure_is_minus_one() {
	let bridge = bridge(FakeTransport::refusing());
	let err = bridge.set_lights(false).unwrap_err();
	assert_eq!(err.code(), -1);
	assert_eq!(requests(&bridge).len(), 1);
}

#[test]
fn set_group_targets_given_group() {
	let bridge = bridge(FakeTransport::default().answer(&url("groups/2/action"), 200, "[]"));
	assert_eq!(bridge.set_group(2, true).unwrap(), 200);
}

#[test]
fn get_light_reads_name_and_state() {
	let bridge = bridge(FakeTransport::default().answer(
		&url("lights/42"),
		200,
		r#"{"name":"Lamp","state":{"on":true}}"#,
	));
	let light = bridge.get_light(42).unwrap();
	assert_eq!(requests(&bridge), vec![Request::Get(url("lights/42"))]);
	assert_eq!(light.id, 42);
	let line = light.to_string();
	assert!(line.contains("Lamp"));
	assert!(line.contains("true"));
}

#[test]
fn get_light_not_found_is_status_error() {
	let bridge = bridge(FakeTransport::default());
	assert!(matches!(bridge.get_light(9), Err(Error::Status(404))));
}

#[test]
fn get_light_malformed_body_is_reported() {
	let bridge = bridge(FakeTransport::default().answer(&url("lights/1"), 200, r#"{"name":"Lamp"}"#));
	assert!(matches!(bridge.get_light(1), Err(Error::Json(_))));
}

#[test]
fn get_group_lights_walks_members_in_order() {
	let bridge = bridge(
		FakeTransport::default()
			.answer(&url("groups/3"), 200, r#"{"name":"Living Room","lights":[1,2,3]}"#)
			.answer(&url("lights/1"), 200, r#"{"name":"One","state":{"on":true}}"#)
			.answer(&url("lights/2"), 200, r#"{"name":"Two","state":{"on":false}}"#)
			.answer(&url("lights/3"), 200, r#"{"name":"Three","state":{"on":true}}"#),
	);
	let result = bridge.get_group_lights(3).unwrap();
	assert_eq!(result.group.name, "Living Room");
	assert_eq!(
		result.lights.iter().map(|l| l.name.as_str()).collect::<Vec<_>>(),
		vec!["One", "Two", "Three"]
	);
	assert_eq!(
		requests(&bridge),
		vec![
			Request::Get(url("groups/3")),
			Request::Get(url("lights/1")),
			Request::Get(url("lights/2")),
			Request::Get(url("lights/3")),
		]
	);
}

#[test]
fn get_group_lights_stops_at_first_failing_member() {
	let bridge = bridge(
		FakeTransport::default()
			.answer(&url("groups/1"), 200, r#"{"name":"Hall","lights":["4","5"]}"#)
			.answer(&url("lights/5"), 200, r#"{"name":"Five","state":{"on":true}}"#),
	);
	assert!(matches!(bridge.get_group_lights(1), Err(Error::Status(404))));
	assert_eq!(requests(&bridge).len(), 2);
}
