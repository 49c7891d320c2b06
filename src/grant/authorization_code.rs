use serde::{Deserialize, Serialize};

use crate::CodeBuf;

use super::Grant;

/// Exchanges the code received on the redirect URI for an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationCode {
	pub code: CodeBuf,
}

impl AuthorizationCode {
	pub fn new(code: CodeBuf) -> Self {
		Self { code }
	}
}

impl Grant for AuthorizationCode {
	const GRANT_TYPE: &'static str = "authorization_code";
}
