//! Grants accepted by the token endpoint.
//!
//! - [`authorization_code`]: Authorization Code Grant
//!   ([RFC 6749 Section 4.1.3](https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.3)).
//! - [`refresh_token`]: Refreshing an Access Token
//!   ([RFC 6749 Section 6](https://datatracker.ietf.org/doc/html/rfc6749#section-6)).
use serde::Serialize;

use crate::config::ProviderOptions;

pub mod authorization_code;
pub mod refresh_token;

pub use authorization_code::AuthorizationCode;
pub use refresh_token::RefreshToken;

/// Grant sent to the token endpoint.
///
/// The serialized fields of the implementor are sent next to `grant_type`
/// and the client credentials.
pub trait Grant: Serialize {
	/// Value of the `grant_type` parameter.
	const GRANT_TYPE: &'static str;
}

/// Form body of an access token request.
#[derive(Serialize)]
pub struct TokenRequest<'a, G> {
	pub client_id: &'a str,
	pub client_secret: &'a str,
	pub redirect_uri: &'a str,
	pub grant_type: &'static str,

	#[serde(flatten)]
	pub grant: &'a G,
}

impl<'a, G: Grant> TokenRequest<'a, G> {
	pub fn new(options: &'a ProviderOptions, grant: &'a G) -> Self {
		Self {
			client_id: options.client_id.as_str(),
			client_secret: &options.client_secret,
			redirect_uri: options.redirect_uri.as_str(),
			grant_type: G::GRANT_TYPE,
			grant,
		}
	}
}
