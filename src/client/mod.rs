//! Errors raised while talking to an account service.
use http::StatusCode;

/// Error reported by the account service itself.
///
/// Raised when the service answers with a status of 400 or more, or with a
/// body carrying an `error` member, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identity provider error ({status}): {message}")]
pub struct IdentityProviderError {
	/// Human readable message, taken from the response body when the service
	/// sent one, or the canonical reason phrase of the status otherwise.
	pub message: String,

	/// Status of the response.
	pub status: StatusCode,

	/// Raw response body.
	pub body: Vec<u8>,
}

impl IdentityProviderError {
	pub fn new(message: impl Into<String>, status: StatusCode, body: Vec<u8>) -> Self {
		Self {
			message: message.into(),
			status,
			body,
		}
	}

	/// Response body as text, lossily decoded.
	pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
		String::from_utf8_lossy(&self.body)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum OAuth2ClientError {
	#[error("unable to send request: {0}")]
	Request(String),

	#[error("unable to receive response: {0}")]
	Response(String),

	#[error(transparent)]
	IdentityProvider(#[from] IdentityProviderError),
}

impl OAuth2ClientError {
	pub fn request(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("request error: {msg}");
		Self::Request(msg)
	}

	pub fn response(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("response error: {msg}");
		Self::Response(msg)
	}

	pub fn identity_provider(e: IdentityProviderError) -> Self {
		log::error!("identity provider error ({}): {}", e.status, e.message);
		Self::IdentityProvider(e)
	}

	/// Returns the account service error, if this is one.
	pub fn as_identity_provider(&self) -> Option<&IdentityProviderError> {
		match self {
			Self::IdentityProvider(e) => Some(e),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identity_provider_error_display() {
		let e = IdentityProviderError::new(
			"invalid_grant",
			StatusCode::BAD_REQUEST,
			br#"{"error":"invalid_grant"}"#.to_vec(),
		);

		assert_eq!(
			e.to_string(),
			"identity provider error (400 Bad Request): invalid_grant"
		);
		assert_eq!(e.body_text(), r#"{"error":"invalid_grant"}"#);
	}

	#[test]
	fn client_error_wraps_identity_provider_error() {
		let e = OAuth2ClientError::identity_provider(IdentityProviderError::new(
			"Internal Server Error",
			StatusCode::INTERNAL_SERVER_ERROR,
			Vec::new(),
		));

		let inner = e.as_identity_provider().unwrap();
		assert_eq!(inner.status, StatusCode::INTERNAL_SERVER_ERROR);
		assert!(OAuth2ClientError::response("x").as_identity_provider().is_none());
	}
}
