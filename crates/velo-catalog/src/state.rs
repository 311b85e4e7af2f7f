//! The view-state machine for the product detail page.
//!
//! Exactly one state is active at a time. The sum type carries the success
//! payload with it, so a "success with no product" combination cannot be
//! represented.

use velo_data::{FetchError, Response};

use crate::product::{ApiProduct, ProductDetail};

/// Which view the detail page renders.
///
/// Transitions are one-directional per load: `Initial` moves to `Loading`
/// when the page mounts, and `Loading` resolves to exactly one of `Success`
/// or `Failure`. There is no path back; a fresh load means a fresh page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Constructed but not yet loading. Renders nothing.
    #[default]
    Initial,
    /// The detail request is in flight.
    Loading,
    /// The detail request succeeded.
    Success(ProductDetail),
    /// The server answered with a non-success status.
    Failure,
}

impl ViewState {
    /// Enter the loading state. Called synchronously before the request is
    /// issued, so the spinner is visible for the whole round trip.
    pub fn begin_load(&mut self) {
        *self = ViewState::Loading;
    }

    /// Resolve a completed response into the next state.
    ///
    /// A 2xx response is parsed and normalized into `Success`; any other
    /// status becomes `Failure` regardless of its body. A 2xx response whose
    /// body does not match the wire shape is a decode fault, surfaced as an
    /// error rather than folded into `Failure`.
    pub fn from_response(response: Response) -> Result<Self, FetchError> {
        if !response.is_success() {
            return Ok(ViewState::Failure);
        }
        let api: ApiProduct = response.json()?;
        Ok(ViewState::Success(ProductDetail::from(api)))
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, ViewState::Initial)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ViewState::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ViewState::Failure)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const DETAIL_BODY: &str = r#"{
        "id": "1", "image_url": "u", "title": "T", "price": 10,
        "description": "d", "brand": "B", "total_reviews": 5,
        "rating": 4, "availability": "IN STOCK",
        "similar_products": [{
            "id": "2", "image_url": "u2", "title": "T2", "price": 20,
            "description": "d2", "brand": "B2", "total_reviews": 1,
            "rating": 3, "availability": "IN STOCK"
        }]
    }"#;

    fn response(status: u16, body: &str) -> Response {
        Response::new(status, HashMap::new(), body.as_bytes().to_vec())
    }

    #[test]
    fn starts_initial() {
        assert!(ViewState::default().is_initial());
    }

    #[test]
    fn begin_load_moves_to_loading() {
        let mut state = ViewState::default();
        state.begin_load();
        assert!(state.is_loading());
    }

    #[test]
    fn ok_response_resolves_to_success() {
        let state = ViewState::from_response(response(200, DETAIL_BODY)).unwrap();
        match state {
            ViewState::Success(detail) => {
                assert_eq!(detail.detail.image_url, "u");
                assert_eq!(detail.similar[0].total_reviews, 1);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn non_ok_response_resolves_to_failure_regardless_of_body() {
        // Even a well-formed body on an error status is discarded.
        let state = ViewState::from_response(response(404, DETAIL_BODY)).unwrap();
        assert!(state.is_failure());

        let state = ViewState::from_response(response(500, r#"{"status":"down"}"#)).unwrap();
        assert!(state.is_failure());
    }

    #[test]
    fn malformed_success_body_is_a_decode_fault() {
        let err = ViewState::from_response(response(200, "not json")).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn load_resolves_to_exactly_one_terminal_state() {
        let mut state = ViewState::default();
        state.begin_load();
        assert!(state.is_loading());

        state = ViewState::from_response(response(200, DETAIL_BODY)).unwrap();
        assert!(state.is_success());
        assert!(!state.is_loading() && !state.is_failure());
    }
}
