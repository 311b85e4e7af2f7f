//! The product-detail API facade.

use velo_data::{ApiClient, FetchError, Response};

use crate::state::ViewState;

/// Client for the product-detail endpoint.
pub struct ProductDetailApi {
    client: ApiClient,
}

impl ProductDetailApi {
    /// Create a facade over the catalog API at the given base URL.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            client: ApiClient::new()
                .with_base_url(api_base)
                .with_default_header("Accept", "application/json"),
        }
    }

    /// Fetch one product's detail plus its similar products.
    ///
    /// Issues exactly one authorized GET and awaits the full body; there is
    /// no retry and no timeout. A non-success status resolves to
    /// [`ViewState::Failure`]; transport and decode faults surface as `Err`
    /// so the caller can decide how to present them.
    ///
    /// An empty token is sent as-is. The server's rejection then comes back
    /// as an ordinary failure status.
    pub async fn fetch_detail(
        &self,
        product_id: &str,
        token: &str,
    ) -> Result<ViewState, FetchError> {
        let response = self
            .client
            .get(format!("/products/{product_id}"))
            .bearer_auth(token)
            .send()
            .await?;
        self.resolve(response)
    }

    /// Map a completed response onto the view-state machine.
    fn resolve(&self, response: Response) -> Result<ViewState, FetchError> {
        ViewState::from_response(response)
    }
}
