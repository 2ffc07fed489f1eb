/// GET-capable HTTP client injected into the services that need network access.
///
/// `Response` and `Error` belong to the implementation; callers get them back
/// exactly as the client produced them.
pub trait HttpClient: Send + Sync {
    type Response: Send;
    type Error: Send;

    fn get(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<Self::Response, Self::Error>> + Send;
}
