//! HTTP transport layer, content types, and response body decoding.
use http::{HeaderMap, HeaderValue, header};
use serde::Serialize;
use serde_json::Value;

use crate::client::OAuth2ClientError;

mod client;

pub use client::*;

/// `Content-Type: application/json` header value.
pub const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// `Content-Type: application/x-www-form-urlencoded` header value.
pub const APPLICATION_X_WWW_FORM_URLENCODED: HeaderValue =
	HeaderValue::from_static("application/x-www-form-urlencoded");

/// Returns `true` if the `Content-Type` header is present and contains
/// `needle`.
///
/// Account services are loose about the exact media type they send
/// (`application/json; charset=utf-8`, `text/javascript`, ...), so only a
/// substring is looked for.
pub fn content_type_contains(headers: &HeaderMap, needle: &str) -> bool {
	headers
		.get(header::CONTENT_TYPE)
		.and_then(|value| value.to_str().ok())
		.is_some_and(|value| value.to_ascii_lowercase().contains(needle))
}

/// Trait for encoding request bodies with a specific content type.
pub trait ContentType {
	/// The `Content-Type` header value.
	const VALUE: HeaderValue;

	/// Serializes the given value with this content type's encoding.
	fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, OAuth2ClientError>;
}

/// URL-encoded form (`application/x-www-form-urlencoded`) content type
/// encoding.
pub struct WwwFormUrlEncoded;

impl ContentType for WwwFormUrlEncoded {
	const VALUE: HeaderValue = APPLICATION_X_WWW_FORM_URLENCODED;

	fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, OAuth2ClientError> {
		log::debug!("serializing {}", std::any::type_name_of_val(value));
		serde_html_form::to_string(value)
			.map(String::into_bytes)
			.map_err(OAuth2ClientError::request)
	}
}

/// Decodes a response body according to its `Content-Type`.
///
/// - JSON media types are parsed as JSON, and a malformed body is an error.
/// - Form media types are parsed into a JSON object of strings.
/// - Anything else is tried as JSON and otherwise kept as a JSON string
///   holding the (lossily decoded) body.
///
/// The status is not looked at: error bodies are decoded the same way, so
/// that they can be inspected afterwards.
pub fn decode_body(response: &http::Response<Vec<u8>>) -> Result<Value, OAuth2ClientError> {
	let headers = response.headers();
	let body = response.body();

	if content_type_contains(headers, "json") {
		return serde_json::from_slice(body).map_err(|e| {
			OAuth2ClientError::response(format!("failed to parse JSON response: {e}"))
		});
	}

	if content_type_contains(headers, "urlencoded") {
		return serde_html_form::from_bytes::<serde_json::Map<String, Value>>(body)
			.map(Value::Object)
			.map_err(OAuth2ClientError::response);
	}

	Ok(serde_json::from_slice(body)
		.unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned())))
}
