//! Test doubles shared by the unit tests.
use std::{
	cell::{Ref, RefCell},
	collections::VecDeque,
};

use http::{StatusCode, header};
use serde_json::Value;

use crate::{client::OAuth2ClientError, transport::HttpClient};

/// HTTP client replaying canned responses in order, and recording the
/// requests it receives.
pub struct MockHttpClient {
	responses: RefCell<VecDeque<http::Response<Vec<u8>>>>,
	requests: RefCell<Vec<http::Request<Vec<u8>>>>,
}

impl MockHttpClient {
	pub fn new(responses: impl IntoIterator<Item = http::Response<Vec<u8>>>) -> Self {
		let _ = env_logger::builder().is_test(true).try_init();

		Self {
			responses: RefCell::new(responses.into_iter().collect()),
			requests: RefCell::new(Vec::new()),
		}
	}

	pub fn requests(&self) -> Ref<'_, Vec<http::Request<Vec<u8>>>> {
		self.requests.borrow()
	}
}

impl HttpClient for MockHttpClient {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, OAuth2ClientError> {
		self.requests.borrow_mut().push(request);
		self.responses
			.borrow_mut()
			.pop_front()
			.ok_or_else(|| OAuth2ClientError::request("no response left"))
	}
}

/// Response with a JSON body and the loose `json` content type some
/// services send.
pub fn json_response(status: StatusCode, body: &Value) -> http::Response<Vec<u8>> {
	http::Response::builder()
		.status(status)
		.header(header::CONTENT_TYPE, "json")
		.body(serde_json::to_vec(body).unwrap())
		.unwrap()
}
