//! [OAuth 2.0][rfc6749] client providers for the OrbitronDev family of account
//! services.
//!
//! A [`Provider`](provider::Provider) describes an account service (its
//! endpoints, scopes, error reporting and profile format) and runs the
//! authorization code flow against it:
//!
//! 1. send the user-agent to [`authorization_url`](provider::Provider::authorization_url),
//! 2. exchange the code received back for a [`Token`](token::Token) with
//!    [`access_token`](provider::Provider::access_token),
//! 3. fetch the profile of the user with
//!    [`resource_owner`](provider::Provider::resource_owner).
//!
//! The services themselves live in [`account`]: [`OrbitronDevProvider`] and
//! [`OpenIdProvider`] share the same endpoints and yield an
//! [`AccountResourceOwner`], which resolves the active postal address of the
//! user.
//!
//! # Modules
//!
//! - [`account`]: OrbitronDev and OpenID account services.
//! - [`client`]: Error types.
//! - [`config`]: Provider options.
//! - [`grant`]: Grants sent to the token endpoint (authorization code,
//!   refresh token).
//! - [`provider`]: Provider trait and the generic flow.
//! - [`token`]: Access tokens.
//! - [`transport`]: HTTP transport layer and content type handling.
//! - [`util`]: URI utilities.
//!
//! Core OAuth 2.0 types ([`AccessToken`], [`ClientId`], [`Code`],
//! [`ScopeToken`], [`State`], etc.) are re-exported at the crate root.
//!
//! [rfc6749]: https://datatracker.ietf.org/doc/html/rfc6749
#[cfg(feature = "reqwest")]
pub use reqwest;

pub use http;

pub mod account;
pub mod client;
pub mod config;
pub mod grant;
pub mod provider;
pub mod resource_owner;
pub mod token;
pub mod transport;
mod types;
pub mod util;

#[cfg(test)]
mod testing;

pub use account::{AccountResourceOwner, OpenIdProvider, OrbitronDevProvider};
pub use types::*;
