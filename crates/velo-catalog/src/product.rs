//! Product models.
//!
//! [`ApiProduct`] mirrors the catalog API's wire format; [`Product`] is the
//! normalized shape the storefront renders. Normalization is a one-to-one
//! field mapping with no validation or defaulting.

use serde::{Deserialize, Serialize};

/// A product as returned by the catalog API.
///
/// The root object of a detail response embeds its similar products; the
/// embedded elements themselves carry no nested `similar_products`, which is
/// why the field is defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProduct {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub brand: String,
    pub total_reviews: u32,
    pub rating: f64,
    pub availability: String,
    #[serde(default)]
    pub similar_products: Vec<ApiProduct>,
}

/// A normalized product, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub brand: String,
    pub total_reviews: u32,
    pub rating: f64,
    pub availability: String,
}

impl Product {
    /// Format the price for display.
    pub fn price_display(&self) -> String {
        format!("Rs.{}", self.price)
    }
}

impl From<ApiProduct> for Product {
    fn from(api: ApiProduct) -> Self {
        Self {
            id: api.id,
            image_url: api.image_url,
            title: api.title,
            price: api.price,
            description: api.description,
            brand: api.brand,
            total_reviews: api.total_reviews,
            rating: api.rating,
            availability: api.availability,
        }
    }
}

/// The payload of a successfully loaded detail page: the product itself plus
/// its similar products in response order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub detail: Product,
    pub similar: Vec<Product>,
}

impl From<ApiProduct> for ProductDetail {
    fn from(mut api: ApiProduct) -> Self {
        let similar = std::mem::take(&mut api.similar_products)
            .into_iter()
            .map(Product::from)
            .collect();
        Self {
            detail: Product::from(api),
            similar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_BODY: &str = r#"{
        "id": "1",
        "image_url": "u",
        "title": "T",
        "price": 10,
        "description": "d",
        "brand": "B",
        "total_reviews": 5,
        "rating": 4,
        "availability": "IN STOCK",
        "similar_products": [{
            "id": "2",
            "image_url": "u2",
            "title": "T2",
            "price": 20,
            "description": "d2",
            "brand": "B2",
            "total_reviews": 1,
            "rating": 3,
            "availability": "IN STOCK"
        }]
    }"#;

    #[test]
    fn wire_format_deserializes() {
        let api: ApiProduct = serde_json::from_str(DETAIL_BODY).unwrap();
        assert_eq!(api.id, "1");
        assert_eq!(api.similar_products.len(), 1);
        // Embedded similar products carry no nested list of their own.
        assert!(api.similar_products[0].similar_products.is_empty());
    }

    #[test]
    fn normalization_maps_fields_one_to_one() {
        let api: ApiProduct = serde_json::from_str(DETAIL_BODY).unwrap();
        let detail = ProductDetail::from(api);

        assert_eq!(detail.detail.image_url, "u");
        assert_eq!(detail.detail.title, "T");
        assert_eq!(detail.detail.price, 10.0);
        assert_eq!(detail.detail.total_reviews, 5);
        assert_eq!(detail.detail.availability, "IN STOCK");

        assert_eq!(detail.similar.len(), 1);
        assert_eq!(detail.similar[0].id, "2");
        assert_eq!(detail.similar[0].total_reviews, 1);
        assert_eq!(detail.similar[0].rating, 3.0);
    }

    #[test]
    fn similar_products_preserve_response_order() {
        let body = r#"{
            "id": "1", "image_url": "u", "title": "T", "price": 10,
            "description": "d", "brand": "B", "total_reviews": 5,
            "rating": 4, "availability": "IN STOCK",
            "similar_products": [
                {"id": "9", "image_url": "a", "title": "A", "price": 1,
                 "description": "", "brand": "", "total_reviews": 0,
                 "rating": 0, "availability": ""},
                {"id": "3", "image_url": "b", "title": "B", "price": 2,
                 "description": "", "brand": "", "total_reviews": 0,
                 "rating": 0, "availability": ""}
            ]
        }"#;
        let detail = ProductDetail::from(serde_json::from_str::<ApiProduct>(body).unwrap());
        let ids: Vec<&str> = detail.similar.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["9", "3"]);
    }

    #[test]
    fn detail_with_n_similar_products_yields_n_uniquely_keyed_entries() {
        fn sibling(id: &str) -> ApiProduct {
            ApiProduct {
                id: id.to_string(),
                image_url: "u".to_string(),
                title: "T".to_string(),
                price: 10.0,
                description: "d".to_string(),
                brand: "B".to_string(),
                total_reviews: 0,
                rating: 4.0,
                availability: "IN STOCK".to_string(),
                similar_products: Vec::new(),
            }
        }

        let mut api = sibling("1");
        api.similar_products = vec![sibling("2"), sibling("3"), sibling("4")];

        let detail = ProductDetail::from(api);
        assert_eq!(detail.similar.len(), 3);

        let ids: std::collections::HashSet<&str> =
            detail.similar.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn price_display_uses_rupee_prefix() {
        let api: ApiProduct = serde_json::from_str(DETAIL_BODY).unwrap();
        let product = Product::from(api);
        assert_eq!(product.price_display(), "Rs.10");
    }
}
