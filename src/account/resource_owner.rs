use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::serde_as;

use crate::resource_owner::ResourceOwner;

use super::lenient::{AddressBook, Integer, RawText, Text};

/// Postal address of an account.
#[serde_as]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
	#[serde_as(deserialize_as = "RawText")]
	pub street: Option<String>,

	#[serde_as(deserialize_as = "RawText")]
	pub house_number: Option<String>,

	#[serde_as(deserialize_as = "RawText")]
	pub zip_code: Option<String>,

	#[serde_as(deserialize_as = "RawText")]
	pub city: Option<String>,

	#[serde_as(deserialize_as = "RawText")]
	pub country: Option<String>,
}

/// Typed view of an account profile.
///
/// Every member is optional: the service only sends what the granted scopes
/// allow, and empty values (`""`, `"0"`, `0`, `null`) read as absent.
#[serde_as]
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
	#[serde_as(deserialize_as = "Integer")]
	pub id: Option<i64>,

	#[serde_as(deserialize_as = "Text")]
	pub username: Option<String>,

	#[serde_as(deserialize_as = "Text")]
	pub email: Option<String>,

	/// First name.
	#[serde_as(deserialize_as = "Text")]
	pub name: Option<String>,

	#[serde_as(deserialize_as = "Text")]
	pub surname: Option<String>,

	/// Unix timestamp.
	#[serde_as(deserialize_as = "Integer")]
	pub birthday: Option<i64>,

	/// Key of the active address in `addresses`.
	#[serde_as(deserialize_as = "RawText")]
	pub active_address: Option<String>,

	#[serde_as(deserialize_as = "AddressBook")]
	pub addresses: Option<BTreeMap<String, Address>>,

	#[serde(rename = "subscription_type")]
	#[serde_as(deserialize_as = "Text")]
	pub subscription: Option<String>,
}

/// Authenticated user of an account service.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountResourceOwner {
	raw: Map<String, Value>,
	profile: Profile,
}

impl AccountResourceOwner {
	pub fn new(raw: Map<String, Value>) -> Self {
		// Every member adapter is infallible, the default only covers a
		// change of that.
		let profile = serde_json::from_value(Value::Object(raw.clone())).unwrap_or_default();
		Self { raw, profile }
	}

	pub fn profile(&self) -> &Profile {
		&self.profile
	}

	pub fn id(&self) -> Option<i64> {
		self.profile.id
	}

	pub fn username(&self) -> Option<&str> {
		self.profile.username.as_deref()
	}

	pub fn email(&self) -> Option<&str> {
		self.profile.email.as_deref()
	}

	pub fn first_name(&self) -> Option<&str> {
		self.profile.name.as_deref()
	}

	pub fn surname(&self) -> Option<&str> {
		self.profile.surname.as_deref()
	}

	pub fn birthday(&self) -> Option<DateTime<Utc>> {
		DateTime::from_timestamp(self.profile.birthday?, 0)
	}

	pub fn subscription(&self) -> Option<&str> {
		self.profile.subscription.as_deref()
	}

	pub fn addresses(&self) -> Option<&BTreeMap<String, Address>> {
		self.profile.addresses.as_ref()
	}

	/// Address currently selected by the user.
	///
	/// A single address is always the active one, whatever `active_address`
	/// says. With several addresses, `active_address` must name one of them.
	pub fn active_address(&self) -> Option<&Address> {
		let addresses = self.addresses()?;

		if addresses.len() == 1 {
			return addresses.values().next();
		}

		addresses.get(self.profile.active_address.as_deref()?)
	}

	pub fn into_map(self) -> Map<String, Value> {
		self.raw
	}
}

impl ResourceOwner for AccountResourceOwner {
	type Id = i64;

	fn id(&self) -> Option<i64> {
		self.profile.id
	}

	fn to_map(&self) -> &Map<String, Value> {
		&self.raw
	}
}
