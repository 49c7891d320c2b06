use http::HeaderValue;
use str_newtype::StrNewType;

use super::validate_vschars;

/// Access token string, as found in the `access_token` member of a token
/// response.
///
/// # Grammar
///
/// ```abnf
/// access-token = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(AccessTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct AccessToken(str);

impl AccessToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		validate_vschars(bytes, 1)
	}

	/// `Authorization` header value presenting this token as a bearer token.
	///
	/// See: <https://datatracker.ietf.org/doc/html/rfc6750#section-2.1>
	pub fn bearer_header(&self) -> HeaderValue {
		let mut value = HeaderValue::try_from(format!("Bearer {}", self.as_str()))
			// UNWRAP SAFETY: VSCHARs are all valid header value bytes.
			.unwrap();
		value.set_sensitive(true);
		value
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bearer_header_is_sensitive() {
		let token = AccessToken::new("mock_access_token").unwrap();
		let header = token.bearer_header();
		assert_eq!(header, "Bearer mock_access_token");
		assert!(header.is_sensitive());
	}

	#[test]
	fn empty_token_is_invalid() {
		assert!(AccessToken::new("").is_err());
		assert!(AccessTokenBuf::new("tab\there".to_owned()).is_err());
	}
}
