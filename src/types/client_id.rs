use str_newtype::StrNewType;

use super::validate_vschars;

/// Client identifier issued to a registered client by the account service.
///
/// Unlike the other protocol strings, an identifier may be empty, see
/// [RFC 6749 Section 2.2](https://datatracker.ietf.org/doc/html/rfc6749#section-2.2).
///
/// # Grammar
///
/// ```abnf
/// client_id = *VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ClientIdBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ClientId(str);

impl ClientId {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		validate_vschars(bytes, 0)
	}
}

#[macro_export]
macro_rules! client_id {
	($value:literal) => {{
		match $crate::ClientId::new($value) {
			Ok(value) => value,
			Err(_) => panic!("invalid client identifier"),
		}
	}};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_visible_ascii() {
		assert!(ClientId::new("mock_client_id").is_ok());
		assert!(ClientId::new("client 123").is_ok());
		assert!(ClientId::new("").is_ok());
	}

	#[test]
	fn rejects_control_chars() {
		assert!(ClientId::new("abc\ndef").is_err());
		assert!(ClientId::new("abc\x7f").is_err());
		assert!(ClientIdBuf::new("\x00".to_owned()).is_err());
	}

	#[test]
	fn deserializes_with_validation() {
		let id: ClientIdBuf = serde_json::from_str("\"mock_client_id\"").unwrap();
		assert_eq!(id.as_str(), "mock_client_id");
		assert!(serde_json::from_str::<ClientIdBuf>("\"a\\u0000b\"").is_err());
	}
}
