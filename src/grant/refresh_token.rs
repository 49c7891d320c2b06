use serde::{Deserialize, Serialize};

use super::Grant;

/// Trades a refresh token for a new access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
	pub refresh_token: String,
}

impl RefreshToken {
	pub fn new(refresh_token: impl Into<String>) -> Self {
		Self {
			refresh_token: refresh_token.into(),
		}
	}
}

impl Grant for RefreshToken {
	const GRANT_TYPE: &'static str = "refresh_token";
}
