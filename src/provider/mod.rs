//! Provider abstraction and the generic authorization code flow.
//!
//! A provider only describes an account service: where its endpoints are,
//! which scopes it needs, how it reports errors and how its profiles look.
//! The provided methods of [`Provider`] run the flow on top of that
//! description:
//!
//! 1. [`Provider::authorization_url`] builds the URL the user-agent is sent
//!    to, along with the state to expect back.
//! 2. [`Provider::access_token`] trades a [`Grant`] for a [`Token`].
//! 3. [`Provider::resource_owner`] fetches the profile of the user the token
//!    belongs to.
use chrono::Utc;
use http::{Method, header};
use iref::{Uri, UriBuf};
use serde_json::{Map, Value};

use crate::{
	AccessToken, ScopeTokenBuf, StateBuf,
	client::{IdentityProviderError, OAuth2ClientError},
	config::ProviderOptions,
	grant::{Grant, TokenRequest},
	join_scopes,
	resource_owner::ResourceOwner,
	token::{Token, TokenResponse},
	transport::{APPLICATION_JSON, ContentType, HttpClient, WwwFormUrlEncoded, decode_body},
	util::extend_uri_query,
};

mod authorization;

pub use authorization::*;

/// Account service an OAuth 2.0 client can authenticate users against.
pub trait Provider {
	type ResourceOwner: ResourceOwner;

	/// Token response member holding the identifier of the resource owner,
	/// for services that send it along with the token.
	const ACCESS_TOKEN_RESOURCE_OWNER_ID: Option<&'static str> = None;

	/// Client credentials.
	fn options(&self) -> &ProviderOptions;

	/// Authorization endpoint, without query parameters.
	fn base_authorization_url(&self) -> UriBuf;

	/// Token endpoint.
	fn base_access_token_url(&self) -> UriBuf;

	/// Endpoint returning the profile of the owner of `token`.
	fn resource_owner_details_url(&self, token: &Token) -> UriBuf;

	/// Scopes requested when the caller asks for none.
	///
	/// Only the scopes needed to read the resource owner details belong
	/// here.
	fn default_scopes(&self) -> Vec<ScopeTokenBuf>;

	/// Separator placed between scopes in the `scope` parameter.
	fn scope_separator(&self) -> &str {
		","
	}

	/// Inspects a decoded response for errors reported by the service.
	fn check_response(
		&self,
		response: &http::Response<Vec<u8>>,
		data: &Value,
	) -> Result<(), IdentityProviderError>;

	/// Wraps a successful resource owner details response.
	fn create_resource_owner(
		&self,
		response: Map<String, Value>,
		token: &Token,
	) -> Self::ResourceOwner;

	/// Builds the authorization URL.
	///
	/// The returned state must be kept by the caller and compared with the
	/// one received on the redirect URI.
	fn authorization_url(&self, options: AuthorizationOptions) -> AuthorizationRedirect {
		let client = self.options();
		let state = options.state.unwrap_or_else(StateBuf::new_random);
		let scopes = options.scopes.unwrap_or_else(|| self.default_scopes());
		let redirect_uri = options.redirect_uri.as_ref().unwrap_or(&client.redirect_uri);

		let params = AuthorizationParams {
			state: state.as_str(),
			scope: join_scopes(
				scopes.iter().map(ScopeTokenBuf::as_scope_token),
				self.scope_separator(),
			)
			.unwrap_or_default(),
			response_type: "code",
			approval_prompt: options.prompt.is_none().then_some("auto"),
			prompt: options.prompt.as_deref(),
			redirect_uri: redirect_uri.as_str(),
			client_id: client.client_id.as_str(),
		};

		let mut uri = self.base_authorization_url();
		extend_uri_query(&mut uri, &params);

		AuthorizationRedirect { uri, state }
	}

	/// Requests an access token from the token endpoint.
	#[allow(async_fn_in_trait)]
	async fn access_token<G: Grant>(
		&self,
		http_client: &impl HttpClient,
		grant: &G,
	) -> Result<Token, OAuth2ClientError> {
		let body = WwwFormUrlEncoded::encode(&TokenRequest::new(self.options(), grant))?;

		let request = http::Request::builder()
			.method(Method::POST)
			.uri(self.base_access_token_url().as_str())
			.header(header::CONTENT_TYPE, WwwFormUrlEncoded::VALUE)
			.header(header::ACCEPT, APPLICATION_JSON)
			.body(body)
			.map_err(OAuth2ClientError::request)?;

		let response = http_client.send(request).await?;
		let data = parse_response(self, response)?;

		let token_response: TokenResponse =
			serde_json::from_value(Value::Object(data)).map_err(OAuth2ClientError::response)?;

		Ok(Token::from_response(
			token_response,
			Self::ACCESS_TOKEN_RESOURCE_OWNER_ID,
			Utc::now(),
		))
	}

	/// Fetches the profile of the owner of `token`.
	#[allow(async_fn_in_trait)]
	async fn resource_owner(
		&self,
		http_client: &impl HttpClient,
		token: &Token,
	) -> Result<Self::ResourceOwner, OAuth2ClientError> {
		let uri = self.resource_owner_details_url(token);
		let request = self.authenticated_request(Method::GET, &uri, token.token())?;

		let response = http_client.send(request).await?;
		let data = parse_response(self, response)?;

		Ok(self.create_resource_owner(data, token))
	}

	/// Builds a request carrying `token` as a bearer token.
	fn authenticated_request(
		&self,
		method: Method,
		uri: &Uri,
		token: &AccessToken,
	) -> Result<http::Request<Vec<u8>>, OAuth2ClientError> {
		http::Request::builder()
			.method(method)
			.uri(uri.as_str())
			.header(header::AUTHORIZATION, token.bearer_header())
			.header(header::ACCEPT, APPLICATION_JSON)
			.body(Vec::new())
			.map_err(OAuth2ClientError::request)
	}
}

/// Decodes a response, lets the provider check it, and requires a JSON
/// object.
fn parse_response<P: Provider + ?Sized>(
	provider: &P,
	response: http::Response<Vec<u8>>,
) -> Result<Map<String, Value>, OAuth2ClientError> {
	let data = decode_body(&response)?;

	provider
		.check_response(&response, &data)
		.map_err(OAuth2ClientError::identity_provider)?;

	match data {
		Value::Object(map) => Ok(map),
		_ => Err(OAuth2ClientError::response(
			"invalid response received from authorization server, expected a JSON object",
		)),
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use http::StatusCode;
	use iref::uri;
	use serde_json::json;

	use super::*;
	use crate::{
		ClientIdBuf,
		grant::RefreshToken,
		testing::{MockHttpClient, json_response},
	};

	/// Minimal provider relying on every default.
	struct Echo {
		options: ProviderOptions,
	}

	impl Echo {
		fn new() -> Self {
			Self {
				options: ProviderOptions::new(
					ClientIdBuf::new("mock_client_id".to_owned()).unwrap(),
					"mock_secret",
					uri!("https://client.example.com/callback").to_owned(),
				),
			}
		}
	}

	impl Provider for Echo {
		type ResourceOwner = Map<String, Value>;

		fn options(&self) -> &ProviderOptions {
			&self.options
		}

		fn base_authorization_url(&self) -> UriBuf {
			uri!("https://echo.example.com/authorize?lang=en").to_owned()
		}

		fn base_access_token_url(&self) -> UriBuf {
			uri!("https://echo.example.com/token").to_owned()
		}

		fn resource_owner_details_url(&self, _token: &Token) -> UriBuf {
			uri!("https://echo.example.com/me").to_owned()
		}

		fn default_scopes(&self) -> Vec<ScopeTokenBuf> {
			vec![
				ScopeTokenBuf::new("read".to_owned()).unwrap(),
				ScopeTokenBuf::new("write".to_owned()).unwrap(),
			]
		}

		fn check_response(
			&self,
			response: &http::Response<Vec<u8>>,
			_data: &Value,
		) -> Result<(), IdentityProviderError> {
			if response.status().is_success() {
				Ok(())
			} else {
				Err(IdentityProviderError::new(
					"failed",
					response.status(),
					response.body().clone(),
				))
			}
		}

		fn create_resource_owner(
			&self,
			response: Map<String, Value>,
			_token: &Token,
		) -> Self::ResourceOwner {
			response
		}
	}

	impl ResourceOwner for Map<String, Value> {
		type Id = String;

		fn id(&self) -> Option<String> {
			self.get("id").map(Value::to_string)
		}

		fn to_map(&self) -> &Map<String, Value> {
			self
		}
	}

	fn query(uri: &Uri) -> BTreeMap<String, String> {
		serde_html_form::from_str(uri.query().unwrap().as_str()).unwrap()
	}

	#[test]
	fn default_scope_separator_is_comma() {
		let redirect = Echo::new().authorization_url(AuthorizationOptions::default());
		let query = query(&redirect.uri);

		assert_eq!(query["scope"], "read,write");
		assert_eq!(query["lang"], "en");
		assert_eq!(query["approval_prompt"], "auto");
		assert_eq!(query["state"], redirect.state.as_str());
	}

	#[test]
	fn prompt_replaces_approval_prompt() {
		let redirect = Echo::new().authorization_url(
			AuthorizationOptions::default()
				.with_prompt("consent")
				.with_redirect_uri(uri!("https://client.example.com/other").to_owned()),
		);
		let query = query(&redirect.uri);

		assert_eq!(query["prompt"], "consent");
		assert!(!query.contains_key("approval_prompt"));
		assert_eq!(query["redirect_uri"], "https://client.example.com/other");
	}

	#[tokio::test]
	async fn refresh_grant_is_posted_as_form() {
		let http = MockHttpClient::new([json_response(
			StatusCode::OK,
			&json!({ "access_token": "new_access_token", "expires_in": 60 }),
		)]);

		let token = Echo::new()
			.access_token(&http, &RefreshToken::new("mock_refresh_token"))
			.await
			.unwrap();

		assert_eq!(token.token().as_str(), "new_access_token");
		assert_eq!(token.resource_owner_id(), None);

		let requests = http.requests();
		assert_eq!(*requests[0].method(), Method::POST);
		assert_eq!(
			requests[0].headers()[header::CONTENT_TYPE],
			"application/x-www-form-urlencoded"
		);
		let body: BTreeMap<String, String> =
			serde_html_form::from_bytes(requests[0].body()).unwrap();
		assert_eq!(body["grant_type"], "refresh_token");
		assert_eq!(body["refresh_token"], "mock_refresh_token");
		assert_eq!(body["client_secret"], "mock_secret");
	}

	#[tokio::test]
	async fn non_object_response_is_rejected() {
		let http = MockHttpClient::new([json_response(StatusCode::OK, &json!(["a", "b"]))]);

		let error = Echo::new()
			.access_token(&http, &RefreshToken::new("r"))
			.await
			.unwrap_err();

		assert!(matches!(error, OAuth2ClientError::Response(_)));
	}

	#[tokio::test]
	async fn transport_error_is_propagated() {
		let http = MockHttpClient::new([]);

		let error = Echo::new()
			.access_token(&http, &RefreshToken::new("r"))
			.await
			.unwrap_err();

		assert!(matches!(error, OAuth2ClientError::Request(_)));
	}
}
