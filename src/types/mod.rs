//! Core OAuth 2.0 string types.
//!
//! Each type is validated against the grammar of
//! [RFC 6749](https://datatracker.ietf.org/doc/html/rfc6749) and comes as a
//! borrowed/owned pair (e.g. [`Code`] / [`CodeBuf`]), the same way [`str`]
//! pairs with [`String`].
mod access_token;
mod client_id;
mod code;
mod scope;
mod state;

pub use access_token::*;
pub use client_id::*;
pub use code::*;
pub use scope::*;
pub use state::*;

/// VSCHAR: visible ASCII plus space, `0x20..=0x7E`.
const fn is_vschar(c: u8) -> bool {
	c >= 0x20 && c <= 0x7e
}

/// NQCHAR: VSCHAR without `"` and `\`.
const fn is_nqchar(c: u8) -> bool {
	c == 0x21 || (c >= 0x23 && c <= 0x5b) || (c >= 0x5d && c <= 0x7e)
}

/// Returns `true` if `bytes` holds at least `min` VSCHARs and nothing else.
const fn validate_vschars(bytes: &[u8], min: usize) -> bool {
	let mut i = 0;

	while i < bytes.len() {
		if !is_vschar(bytes[i]) {
			return false;
		}

		i += 1
	}

	i >= min
}
