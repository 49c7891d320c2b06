//! Provider configuration.
use std::fmt;

use iref::UriBuf;
use serde::{Deserialize, Serialize};

use crate::ClientIdBuf;

/// Client credentials and endpoint overrides of a provider.
///
/// Keys are camel-cased so that the usual configuration shape
/// (`clientId`, `clientSecret`, `redirectUri`, `host`) can be loaded from any
/// serde format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOptions {
	/// Identifier registered with the account service.
	pub client_id: ClientIdBuf,

	/// Secret registered with the account service.
	pub client_secret: String,

	/// Where the account service sends the user back after authorization.
	pub redirect_uri: UriBuf,

	/// Overrides the default host of the account service, e.g. to test
	/// against a local instance.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub host: Option<UriBuf>,
}

impl ProviderOptions {
	pub fn new(
		client_id: ClientIdBuf,
		client_secret: impl Into<String>,
		redirect_uri: UriBuf,
	) -> Self {
		Self {
			client_id,
			client_secret: client_secret.into(),
			redirect_uri,
			host: None,
		}
	}

	pub fn with_host(self, host: UriBuf) -> Self {
		Self {
			host: Some(host),
			..self
		}
	}
}

impl fmt::Debug for ProviderOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderOptions")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("redirect_uri", &self.redirect_uri)
			.field("host", &self.host)
			.finish()
	}
}
