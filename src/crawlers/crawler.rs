use crate::error::Result;
use crate::results::Page;

/// The crawl loop's seam to the external HTTP collaborator.
///
/// Implementations perform exactly one attempt per call: transport errors,
/// timeouts and non-2xx statuses all surface as the error case and the
/// caller decides how to recover.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetch an absolute URL and return the resulting page
    async fn fetch(&self, url: &str) -> Result<Page>;
}
