use iref::UriBuf;
use serde::Serialize;

use crate::{ScopeTokenBuf, StateBuf};

/// Per-request options of an authorization URL.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationOptions {
	/// State to send, a random one is generated otherwise.
	pub state: Option<StateBuf>,

	/// Scopes to request instead of the provider's default scopes.
	pub scopes: Option<Vec<ScopeTokenBuf>>,

	/// `prompt` value to send. When set, `approval_prompt` is left out.
	pub prompt: Option<String>,

	/// Redirect URI overriding the configured one.
	pub redirect_uri: Option<UriBuf>,
}

impl AuthorizationOptions {
	pub fn with_state(self, state: StateBuf) -> Self {
		Self {
			state: Some(state),
			..self
		}
	}

	pub fn with_scopes(self, scopes: Vec<ScopeTokenBuf>) -> Self {
		Self {
			scopes: Some(scopes),
			..self
		}
	}

	pub fn with_prompt(self, prompt: impl Into<String>) -> Self {
		Self {
			prompt: Some(prompt.into()),
			..self
		}
	}

	pub fn with_redirect_uri(self, redirect_uri: UriBuf) -> Self {
		Self {
			redirect_uri: Some(redirect_uri),
			..self
		}
	}
}

/// Where to send the user-agent, and the state to expect back on the
/// redirect URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRedirect {
	pub uri: UriBuf,
	pub state: StateBuf,
}

/// Query parameters of an authorization request, in the order they are
/// sent.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.1>
#[derive(Debug, Serialize)]
pub(crate) struct AuthorizationParams<'a> {
	pub state: &'a str,

	/// Always sent, empty when no scope is requested.
	pub scope: String,

	pub response_type: &'static str,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub approval_prompt: Option<&'static str>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub prompt: Option<&'a str>,

	pub redirect_uri: &'a str,

	pub client_id: &'a str,
}
