//! URI helpers.
use iref::{
	Uri, UriBuf, UriRef,
	uri::{Path, Query, QueryBuf},
};
use serde::Serialize;

/// Appends the segments of `path` to the path of `base`.
///
/// An empty base path is made absolute first, so that the segments land after
/// the authority. Query and fragment of `base` are kept.
pub fn join_path(base: &Uri, path: &UriRef) -> UriBuf {
	let mut result = base.to_owned();

	if result.path().is_empty() {
		// UNWRAP SAFETY: `/` is a valid absolute path.
		result.set_path(Path::new("/").unwrap());
	}

	let mut result_path = result.path_mut();
	for s in path.path() {
		result_path.push(s);
	}

	result
}

/// Extends the query parameters of a URI by serializing `value` as
/// `application/x-www-form-urlencoded` and appending the result.
///
/// Existing query parameters on the URI are preserved.
///
/// # Panics
///
/// Panics if `value` cannot be serialized as form-urlencoded data.
pub fn extend_uri_query<T: Serialize>(uri: &mut UriBuf, value: T) {
	let query = serialize_concat_query(
		uri.query().map(ToOwned::to_owned).unwrap_or_default(),
		value,
	);

	if !query.is_empty() {
		uri.set_query(Some(&*query));
	}
}

/// Serializes `value` as form-urlencoded data and concatenates it with the
/// existing query string.
///
/// # Panics
///
/// Panics if `value` cannot be serialized as form-urlencoded data.
pub fn serialize_concat_query<T>(query: QueryBuf, value: T) -> QueryBuf
where
	T: Serialize,
{
	let serialized = serde_html_form::to_string(value).unwrap();
	concat_query(
		query,
		// UNWRAP SAFETY: `serde_html_form` percent-encodes everything that is
		//                not allowed in a query.
		Query::new(&serialized).unwrap(),
	)
}

/// Concatenates two query strings with `&` as separator.
///
/// If either query is empty, the other is returned as-is without a
/// separator.
pub fn concat_query(query: QueryBuf, other: &Query) -> QueryBuf {
	let mut query = query.into_string();

	if !query.is_empty() && !other.is_empty() {
		query.push('&')
	}

	query.push_str(other.as_str());

	// UNWRAP SAFETY: the concatenation of two queries with `&` is a query.
	QueryBuf::new(query.into_bytes()).unwrap()
}
