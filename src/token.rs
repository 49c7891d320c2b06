//! Access token responses.
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::{AccessToken, AccessTokenBuf};

/// `expires` values above this many seconds are absolute timestamps, the
/// others are lifetimes. Roughly ten years.
const EXPIRES_TIMESTAMP_THRESHOLD: i64 = 315_569_260;

/// Successful token endpoint response.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-5.1>
///
/// Numeric members are accepted as JSON numbers or strings, since form
/// encoded responses carry strings only.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
	pub access_token: AccessTokenBuf,

	/// Lifetime in seconds of the access token.
	#[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
	#[serde(default)]
	pub expires_in: Option<i64>,

	/// Non standard absolute expiry timestamp (or lifetime, for small
	/// values) sent by some services instead of `expires_in`.
	#[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
	#[serde(default)]
	pub expires: Option<i64>,

	#[serde(default)]
	pub refresh_token: Option<String>,

	/// Every other member (`token_type`, `scope`, ...).
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Access token obtained from a token endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	access_token: AccessTokenBuf,
	refresh_token: Option<String>,
	expires: Option<DateTime<Utc>>,
	resource_owner_id: Option<String>,
	values: Map<String, Value>,
}

impl Token {
	/// Builds the token from a response received at `now`.
	///
	/// `resource_owner_id_key` names the response member holding the
	/// identifier of the resource owner, for services that send one.
	pub fn from_response(
		response: TokenResponse,
		resource_owner_id_key: Option<&str>,
		now: DateTime<Utc>,
	) -> Self {
		let expires = match (response.expires_in, response.expires) {
			(Some(lifetime), _) => expires_after(now, lifetime),
			(None, Some(t)) if t > EXPIRES_TIMESTAMP_THRESHOLD => DateTime::from_timestamp(t, 0),
			(None, Some(lifetime)) => expires_after(now, lifetime),
			(None, None) => None,
		};

		let resource_owner_id = resource_owner_id_key
			.and_then(|key| response.extra.get(key))
			.and_then(|value| match value {
				Value::String(s) => Some(s.clone()),
				Value::Number(n) => Some(n.to_string()),
				_ => None,
			});

		Self {
			access_token: response.access_token,
			refresh_token: response.refresh_token,
			expires,
			resource_owner_id,
			values: response.extra,
		}
	}

	pub fn token(&self) -> &AccessToken {
		&self.access_token
	}

	pub fn refresh_token(&self) -> Option<&str> {
		self.refresh_token.as_deref()
	}

	/// When the token stops being valid, if the service said so.
	pub fn expires(&self) -> Option<DateTime<Utc>> {
		self.expires
	}

	/// Returns `true` if the token is known to be expired at `now`.
	///
	/// A token without expiry never expires.
	pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
		self.expires.is_some_and(|expires| expires <= now)
	}

	pub fn has_expired(&self) -> bool {
		self.is_expired_at(Utc::now())
	}

	pub fn resource_owner_id(&self) -> Option<&str> {
		self.resource_owner_id.as_deref()
	}

	/// Response members that are not modeled by a dedicated accessor.
	pub fn values(&self) -> &Map<String, Value> {
		&self.values
	}
}

fn expires_after(now: DateTime<Utc>, lifetime: i64) -> Option<DateTime<Utc>> {
	now.checked_add_signed(TimeDelta::try_seconds(lifetime)?)
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn now() -> DateTime<Utc> {
		DateTime::from_timestamp(1_600_000_000, 0).unwrap()
	}

	fn response(value: Value) -> TokenResponse {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn bearer_response() {
		let token = Token::from_response(
			response(json!({
				"access_token": "mock_access_token",
				"expires_in": 3600,
				"token_type": "Bearer",
				"scope": "user:id user:email",
				"refresh_token": "mock_refresh_token"
			})),
			Some("id"),
			now(),
		);

		assert_eq!(token.token().as_str(), "mock_access_token");
		assert_eq!(token.refresh_token(), Some("mock_refresh_token"));
		assert_eq!(token.expires(), Some(now() + TimeDelta::seconds(3600)));
		assert_eq!(token.resource_owner_id(), None);
		assert_eq!(token.values().get("token_type"), Some(&json!("Bearer")));
		assert!(token.values().get("access_token").is_none());
		assert!(!token.is_expired_at(now()));
		assert!(token.is_expired_at(now() + TimeDelta::seconds(3600)));
	}

	#[test]
	fn resource_owner_id_from_number() {
		let token = Token::from_response(
			response(json!({ "access_token": "t", "id": 4242 })),
			Some("id"),
			now(),
		);

		assert_eq!(token.resource_owner_id(), Some("4242"));
	}

	#[test]
	fn form_encoded_lifetime() {
		let token = Token::from_response(
			response(json!({ "access_token": "t", "expires_in": "60" })),
			None,
			now(),
		);

		assert_eq!(token.expires(), Some(now() + TimeDelta::seconds(60)));
	}

	#[test]
	fn absolute_expires() {
		let token = Token::from_response(
			response(json!({ "access_token": "t", "expires": 1_700_000_000 })),
			None,
			now(),
		);
		assert_eq!(token.expires(), DateTime::from_timestamp(1_700_000_000, 0));

		let token = Token::from_response(
			response(json!({ "access_token": "t", "expires": 120 })),
			None,
			now(),
		);
		assert_eq!(token.expires(), Some(now() + TimeDelta::seconds(120)));
	}

	#[test]
	fn no_expiry_never_expires() {
		let token = Token::from_response(response(json!({ "access_token": "t" })), None, now());
		assert_eq!(token.expires(), None);
		assert!(!token.has_expired());
	}

	#[test]
	fn access_token_is_required() {
		let result = serde_json::from_value::<TokenResponse>(json!({ "token_type": "Bearer" }));
		assert!(result.is_err());
	}
}
