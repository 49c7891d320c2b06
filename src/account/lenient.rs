//! Forgiving `serde_with` adapters for profile members.
//!
//! Account services are not strict about the JSON type of profile members,
//! and an empty or zero value means "not set". None of these adapters fail:
//! a member of an unexpected type reads as absent.
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use serde_with::DeserializeAs;

use super::Address;

/// Text member kept as sent. Numbers are rendered as text, empty strings
/// are absent.
pub struct RawText;

impl<'de> DeserializeAs<'de, Option<String>> for RawText {
	fn deserialize_as<D>(deserializer: D) -> Result<Option<String>, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(match Value::deserialize(deserializer)? {
			Value::String(s) if !s.is_empty() => Some(s),
			Value::Number(n) => Some(n.to_string()),
			_ => None,
		})
	}
}

/// Text member where `"0"` means "not set", like an empty string.
pub struct Text;

impl<'de> DeserializeAs<'de, Option<String>> for Text {
	fn deserialize_as<D>(deserializer: D) -> Result<Option<String>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let text: Option<String> = RawText::deserialize_as(deserializer)?;
		Ok(text.filter(|s| s != "0"))
	}
}

/// Integer member. Numeric strings are parsed, fractions are truncated,
/// zero is absent.
pub struct Integer;

impl<'de> DeserializeAs<'de, Option<i64>> for Integer {
	fn deserialize_as<D>(deserializer: D) -> Result<Option<i64>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let n = match Value::deserialize(deserializer)? {
			Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
			Value::String(s) => s.trim().parse().ok(),
			_ => None,
		};

		Ok(n.filter(|n| *n != 0))
	}
}

/// Address book, keyed by address identifier.
///
/// A JSON array is keyed by position. Every entry counts as an address:
/// entries that are not objects read as an empty [`Address`]. An empty book
/// is absent.
pub struct AddressBook;

impl<'de> DeserializeAs<'de, Option<BTreeMap<String, Address>>> for AddressBook {
	fn deserialize_as<D>(deserializer: D) -> Result<Option<BTreeMap<String, Address>>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let entries: Vec<(String, Value)> = match Value::deserialize(deserializer)? {
			Value::Object(map) => map.into_iter().collect(),
			Value::Array(items) => items
				.into_iter()
				.enumerate()
				.map(|(i, item)| (i.to_string(), item))
				.collect(),
			_ => return Ok(None),
		};

		let book: BTreeMap<String, Address> = entries
			.into_iter()
			.map(|(key, value)| {
				let address = match value {
					Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
					_ => Address::default(),
				};

				(key, address)
			})
			.collect();

		Ok(if book.is_empty() { None } else { Some(book) })
	}
}
