//! OrbitronDev account services.
//!
//! Every service of the family shares the same endpoints layout under its
//! host, the same error reporting, and the same profile format. They only
//! differ by their default host, see [`AccountService`].
use std::marker::PhantomData;

use http::StatusCode;
use iref::{Uri, UriBuf, UriRef, uri, uri_ref};
use serde_json::{Map, Value};

use crate::{
	ScopeTokenBuf,
	client::IdentityProviderError,
	config::ProviderOptions,
	provider::Provider,
	token::Token,
	util::join_path,
};

mod lenient;
mod resource_owner;

pub use resource_owner::*;

const AUTHORIZE_PATH: &UriRef = uri_ref!("oauth/authorize");
const TOKEN_PATH: &UriRef = uri_ref!("oauth/token");
const RESOURCE_PATH: &UriRef = uri_ref!("oauth/resource");

/// Account service of the family.
pub trait AccountService {
	/// Display name, used in logs.
	const NAME: &'static str;

	/// Host used when the options do not set one.
	const DEFAULT_HOST: &'static Uri;
}

/// OrbitronDev accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitronDev;

impl AccountService for OrbitronDev {
	const NAME: &'static str = "OrbitronDev";
	const DEFAULT_HOST: &'static Uri = uri!("https://account.orbitrondev.org");
}

/// OpenID accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenId;

impl AccountService for OpenId {
	const NAME: &'static str = "OpenID";
	const DEFAULT_HOST: &'static Uri = uri!("https://openid.manuele-vaccari.ch");
}

pub type OrbitronDevProvider = AccountProvider<OrbitronDev>;

pub type OpenIdProvider = AccountProvider<OpenId>;

/// Provider for an account service `S`.
#[derive(Debug, Clone)]
pub struct AccountProvider<S> {
	options: ProviderOptions,
	host: UriBuf,
	service: PhantomData<S>,
}

impl<S: AccountService> AccountProvider<S> {
	/// Creates a provider, on the host given by `options` or the service's
	/// default host.
	pub fn new(options: ProviderOptions) -> Self {
		let host = options
			.host
			.clone()
			.unwrap_or_else(|| S::DEFAULT_HOST.to_owned());

		log::debug!("{} provider on {host}", S::NAME);

		Self {
			options,
			host,
			service: PhantomData,
		}
	}

	pub fn host(&self) -> &Uri {
		&self.host
	}

	/// Changes the host, e.g. to reach a local instance of the service.
	pub fn set_host(&mut self, host: UriBuf) -> &mut Self {
		log::debug!("{} provider moved to {host}", S::NAME);
		self.host = host;
		self
	}
}

impl<S: AccountService> Provider for AccountProvider<S> {
	type ResourceOwner = AccountResourceOwner;

	const ACCESS_TOKEN_RESOURCE_OWNER_ID: Option<&'static str> = Some("id");

	fn options(&self) -> &ProviderOptions {
		&self.options
	}

	fn base_authorization_url(&self) -> UriBuf {
		join_path(&self.host, AUTHORIZE_PATH)
	}

	fn base_access_token_url(&self) -> UriBuf {
		join_path(&self.host, TOKEN_PATH)
	}

	fn resource_owner_details_url(&self, _token: &Token) -> UriBuf {
		join_path(&self.host, RESOURCE_PATH)
	}

	fn default_scopes(&self) -> Vec<ScopeTokenBuf> {
		Vec::new()
	}

	fn scope_separator(&self) -> &str {
		" "
	}

	fn check_response(
		&self,
		response: &http::Response<Vec<u8>>,
		data: &Value,
	) -> Result<(), IdentityProviderError> {
		check_account_response(response, data)
	}

	fn create_resource_owner(
		&self,
		response: Map<String, Value>,
		_token: &Token,
	) -> AccountResourceOwner {
		AccountResourceOwner::new(response)
	}
}

/// Error check shared by the account services.
///
/// A status of 400 or more is an error, described by the `message` member
/// or else by the reason phrase. Any other status is an error only when the
/// body has an `error` member, which then describes it.
pub fn check_account_response(
	response: &http::Response<Vec<u8>>,
	data: &Value,
) -> Result<(), IdentityProviderError> {
	let status = response.status();

	let message = if status.as_u16() >= 400 {
		Some(member_text(data, "message").unwrap_or_else(|| reason_phrase(status)))
	} else {
		member_text(data, "error")
	};

	match message {
		Some(message) => Err(IdentityProviderError::new(
			message,
			status,
			response.body().clone(),
		)),
		None => Ok(()),
	}
}

/// Non-null member of a JSON object, as text.
fn member_text(data: &Value, key: &str) -> Option<String> {
	match data.get(key)? {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		other => Some(other.to_string()),
	}
}

fn reason_phrase(status: StatusCode) -> String {
	status.canonical_reason().unwrap_or_default().to_owned()
}
