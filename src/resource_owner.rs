use serde_json::{Map, Value};

/// Profile of the authenticated end-user, as returned by a provider.
pub trait ResourceOwner {
	/// Type of the identifier of the resource owner.
	type Id;

	/// Identifier of the resource owner.
	fn id(&self) -> Option<Self::Id>;

	/// Raw profile, exactly as received.
	fn to_map(&self) -> &Map<String, Value>;
}
