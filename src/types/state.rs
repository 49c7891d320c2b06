use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use rand::{RngExt, rng};
use str_newtype::StrNewType;

use super::validate_vschars;

/// Opaque `state` value binding an authorization request to its callback.
///
/// The client keeps it between the redirect and the callback and compares
/// it with the value the account service sends back, which protects the
/// flow against cross-site request forgery.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-10.12>
///
/// # Grammar
///
/// ```abnf
/// state = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(StateBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct State(str);

impl State {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		validate_vschars(bytes, 1)
	}
}

impl StateBuf {
	/// Number of random bytes behind a generated state.
	pub const RANDOM_LEN: usize = 16;

	/// Generates a new random, base64url-encoded 128-bit state.
	pub fn new_random() -> Self {
		let random_bytes: [u8; Self::RANDOM_LEN] = rng().random();
		// SAFETY: base64url output only contains VSCHARs and 16 bytes never
		//         encode to an empty string.
		unsafe { Self::new_unchecked(BASE64_URL_SAFE_NO_PAD.encode(random_bytes)) }
	}
}
