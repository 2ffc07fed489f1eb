use crate::domain::ports::HttpClient;
use std::future::Future;
use std::sync::Arc;

/// Forwards a route to the injected client's GET and hands back whatever it returns.
///
/// The proxy adds nothing of its own: no validation of the route, no retry,
/// no timeout, no mapping of the result. Those all belong to the client.
pub struct FetchProxy<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> FetchProxy<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Issues `client.get(route)` and returns its future unchanged.
    pub fn fetch<'a>(
        &'a self,
        route: &'a str,
    ) -> impl Future<Output = Result<C::Response, C::Error>> + Send + 'a {
        tracing::debug!(route, "fetch");
        self.client.get(route)
    }
}

impl<C: HttpClient> Clone for FetchProxy<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}
