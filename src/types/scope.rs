use str_newtype::StrNewType;

use super::is_nqchar;

/// A single permission requested during authorization.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-3.3>
///
/// # Grammar
///
/// ```abnf
/// scope-token = 1*NQCHAR
/// ```
///
/// Spaces are excluded by the grammar, which is what makes it safe to join
/// tokens with a provider specific separator.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ScopeTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ScopeToken(str);

impl ScopeToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;

		while i < bytes.len() {
			if !is_nqchar(bytes[i]) {
				return false;
			}

			i += 1;
		}

		i > 0
	}
}

#[macro_export]
macro_rules! scope_token {
	($value:literal) => {{
		match $crate::ScopeToken::new($value) {
			Ok(value) => value,
			Err(_) => panic!("invalid scope token"),
		}
	}};
}

/// Joins scope tokens into the value of a `scope` parameter.
///
/// Returns `None` when there is no token.
pub fn join_scopes<'a>(
	tokens: impl IntoIterator<Item = &'a ScopeToken>,
	separator: &str,
) -> Option<String> {
	let mut result = String::new();

	for token in tokens {
		if !result.is_empty() {
			result.push_str(separator);
		}

		result.push_str(token.as_str());
	}

	if result.is_empty() { None } else { Some(result) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scope_token_grammar() {
		assert!(ScopeToken::new("user:id").is_ok());
		assert!(ScopeToken::new("u").is_ok());
		assert!(ScopeToken::new("").is_err());
		assert!(ScopeToken::new("user id").is_err());
		assert!(ScopeToken::new("say\"hi\"").is_err());
		assert!(ScopeToken::new("back\\slash").is_err());
	}

	#[test]
	fn join_with_separator() {
		let tokens = [
			ScopeTokenBuf::new("user:id".to_owned()).unwrap(),
			ScopeTokenBuf::new("user:email".to_owned()).unwrap(),
		];

		let scopes = || tokens.iter().map(ScopeTokenBuf::as_scope_token);

		assert_eq!(
			join_scopes(scopes(), " ").as_deref(),
			Some("user:id user:email")
		);
		assert_eq!(
			join_scopes(scopes(), ",").as_deref(),
			Some("user:id,user:email")
		);
	}

	#[test]
	fn join_nothing() {
		assert_eq!(join_scopes([], " "), None);
	}
}
