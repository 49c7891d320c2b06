use crate::client::OAuth2ClientError;

#[cfg(feature = "reqwest")]
mod reqwest;

/// Sends HTTP requests on behalf of a provider.
///
/// A provider performs exactly one request per operation and never retries,
/// so implementations are free to add their own policies (timeouts, retries,
/// proxies) underneath.
pub trait HttpClient {
	#[allow(async_fn_in_trait)]
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, OAuth2ClientError>;
}

impl<T> HttpClient for &T
where
	T: HttpClient,
{
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, OAuth2ClientError> {
		T::send(*self, request).await
	}
}
