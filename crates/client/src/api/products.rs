//! Products repository.
//!
//! Wraps the `/products` and `/files/product` endpoints. List and detail
//! reads are cached per the repository's [`CacheProfile`]; every successful
//! mutation invalidates the cache so the next read observes the backend's
//! state (last write wins).

use moka::future::Cache;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use pawmart_core::{ProductId, ProductKey, ProductKind, ProductSize, Species, UserId};

use crate::error::{ApiError, ApiResult};
use crate::services::filters::{paginate, parse_price_range};
use crate::services::validation::validate_product_draft;
use crate::types::{Product, ProductDraft, ProductPage};

use super::cache::{CacheProfile, CacheValue, build_cache};
use super::conversions::merge_image_filenames;
use super::conversions::products::convert_product;
use super::files::{ImageUpload, upload_product_images};
use super::{ApiClient, ListEnvelope};

/// Default page size for product listings.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

// =============================================================================
// Filter
// =============================================================================

/// Filter for product listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub limit: u32,
    /// Price-range key resolved through the fixed lookup table;
    /// `"any"` and unknown keys mean no bounds.
    pub price_range: String,
    /// Restrict to products targeting one species.
    pub species: Option<Species>,
    /// Free-text search query. Searches bypass the cache.
    pub query: Option<String>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            price_range: "any".to_owned(),
            species: None,
            query: None,
        }
    }
}

impl ProductFilter {
    fn cache_key(&self) -> String {
        format!(
            "products:{}:{}:{}:{}",
            self.page,
            self.limit,
            self.price_range,
            self.species.map_or_else(String::new, |s| s.to_string()),
        )
    }

    /// Translate the filter into backend query parameters.
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let pagination = paginate(self.page, self.limit);
        let mut query = vec![
            ("offset", pagination.offset.to_string()),
            ("limit", pagination.limit.to_string()),
        ];

        let bounds = parse_price_range(&self.price_range);
        if let Some(min) = bounds.min {
            query.push(("min_price", min.to_string()));
        }
        if let Some(max) = bounds.max {
            query.push(("max_price", max.to_string()));
        }
        if let Some(species) = self.species {
            query.push(("species", species.to_string()));
        }
        if let Some(q) = &self.query {
            query.push(("q", q.clone()));
        }

        query
    }
}

// =============================================================================
// Transport shapes
// =============================================================================

/// A product as the backend returns it. Images are bare filenames.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiProduct {
    pub id: ProductId,
    pub title: String,
    pub slug: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(default)]
    pub sizes: Vec<ProductSize>,
    #[serde(rename = "type")]
    pub kind: ProductKind,
    #[serde(default)]
    pub species: Option<Species>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub user: Option<ApiUserRef>,
}

/// Owning-user reference embedded in product responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUserRef {
    pub id: UserId,
}

/// Whitelisted fields sent on create/update. Anything not listed here
/// never reaches the backend.
#[derive(Debug, Serialize)]
struct ProductPayload<'a> {
    title: &'a str,
    slug: &'a str,
    price: Decimal,
    stock: u32,
    sizes: &'a [ProductSize],
    #[serde(rename = "type")]
    kind: ProductKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    species: Option<Species>,
    tags: &'a [String],
    /// Bare filenames only.
    images: Vec<String>,
}

impl<'a> ProductPayload<'a> {
    fn new(draft: &'a ProductDraft, kind: ProductKind, images: Vec<String>) -> Self {
        Self {
            title: &draft.title,
            slug: &draft.slug,
            price: draft.price,
            stock: draft.stock,
            sizes: &draft.sizes,
            kind,
            species: draft.species,
            tags: &draft.tags,
            images,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for shop products.
#[derive(Clone)]
pub struct ProductsRepo {
    api: ApiClient,
    cache: Cache<String, CacheValue>,
}

impl ProductsRepo {
    /// Create a products repository with the given cache profile.
    #[must_use]
    pub fn new(api: ApiClient, profile: CacheProfile) -> Self {
        Self {
            api,
            cache: build_cache(profile),
        }
    }

    /// Get one page of products matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self, filter: &ProductFilter) -> ApiResult<ProductPage> {
        let cache_key = filter.cache_key();

        // Check cache (searches always go to the backend)
        if filter.query.is_none()
            && let Some(CacheValue::ProductPage(page)) = self.cache.get(&cache_key).await
        {
            debug!("cache hit for products");
            return Ok(page);
        }

        let envelope: ListEnvelope<ApiProduct> =
            self.api.get_json("products", &filter.to_query()).await?;
        let (items, total, pages) = envelope.into_page(filter.limit);

        let page = ProductPage {
            products: items
                .into_iter()
                .map(|p| convert_product(p, self.api.base_url()))
                .collect(),
            total,
            pages,
        };

        if filter.query.is_none() {
            self.cache
                .insert(cache_key, CacheValue::ProductPage(page.clone()))
                .await;
        }

        Ok(page)
    }

    /// Get a product by key.
    ///
    /// The `"new"` sentinel synthesizes an empty draft product without any
    /// backend call.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn get_product(&self, key: &ProductKey) -> ApiResult<Product> {
        let Some(id) = key.id() else {
            debug!("synthesizing empty draft for new-product sentinel");
            return Ok(Product::draft());
        };

        let cache_key = format!("product:{id}");
        if let Some(CacheValue::Product(product)) = self.cache.get(&cache_key).await {
            debug!("cache hit for product");
            return Ok(*product);
        }

        let api_product: ApiProduct = self.api.get_json(&format!("products/{id}"), &[]).await?;
        let product = convert_product(api_product, self.api.base_url());

        self.cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Create a product, uploading any new image files first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` before any request when the draft is
    /// invalid; any upload failure aborts the whole operation.
    #[instrument(skip(self, draft, new_images), fields(images = new_images.len()))]
    pub async fn create_product(
        &self,
        draft: &ProductDraft,
        new_images: Vec<ImageUpload>,
    ) -> ApiResult<Product> {
        let (kind, images) = self.stage(draft, new_images).await?;
        let payload = ProductPayload::new(draft, kind, images);

        let api_product: ApiProduct = self.api.post_json("products", &payload).await?;
        self.invalidate_all().await;

        Ok(convert_product(api_product, self.api.base_url()))
    }

    /// Update a product, uploading any new image files first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` before any request when the draft is
    /// invalid; any upload failure aborts the whole operation.
    #[instrument(skip(self, draft, new_images), fields(id = %id, images = new_images.len()))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
        new_images: Vec<ImageUpload>,
    ) -> ApiResult<Product> {
        let (kind, images) = self.stage(draft, new_images).await?;
        let payload = ProductPayload::new(draft, kind, images);

        let api_product: ApiProduct = self
            .api
            .patch_json(&format!("products/{id}"), &payload)
            .await?;
        self.invalidate_all().await;

        Ok(convert_product(api_product, self.api.base_url()))
    }

    /// Validate the draft, upload new files in parallel, and produce the
    /// merged filename list for the payload.
    async fn stage(
        &self,
        draft: &ProductDraft,
        new_images: Vec<ImageUpload>,
    ) -> ApiResult<(ProductKind, Vec<String>)> {
        let problems = validate_product_draft(draft);
        if !problems.is_empty() {
            return Err(ApiError::Validation(problems));
        }
        let kind = draft
            .kind
            .ok_or_else(|| ApiError::Validation(vec!["product kind is required".to_owned()]))?;

        let uploaded = upload_product_images(&self.api, new_images).await?;
        Ok((kind, merge_image_filenames(&draft.images, uploaded)))
    }

    /// Drop every cached product entry.
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_includes_pagination() {
        let filter = ProductFilter {
            page: 3,
            limit: 10,
            ..Default::default()
        };
        let query = filter.to_query();
        assert!(query.contains(&("offset", "20".to_owned())));
        assert!(query.contains(&("limit", "10".to_owned())));
    }

    #[test]
    fn test_filter_query_resolves_price_range() {
        let filter = ProductFilter {
            price_range: "200+".to_owned(),
            ..Default::default()
        };
        let query = filter.to_query();
        assert!(query.contains(&("min_price", "200".to_owned())));
        assert!(!query.iter().any(|(k, _)| *k == "max_price"));
    }

    #[test]
    fn test_filter_query_omits_bounds_for_any() {
        let query = ProductFilter::default().to_query();
        assert!(!query.iter().any(|(k, _)| *k == "min_price"));
        assert!(!query.iter().any(|(k, _)| *k == "max_price"));
    }

    #[test]
    fn test_api_product_deserializes_backend_shape() {
        let product: ApiProduct = serde_json::from_str(
            r#"{
                "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "title": "Rope Tug",
                "slug": "rope_tug",
                "price": 12.5,
                "stock": 7,
                "sizes": ["S", "M"],
                "type": "toy",
                "species": "dog",
                "tags": ["chew"],
                "images": ["rope.jpg"],
                "user": {"id": "7c9e6679-7425-40de-944b-e07fc1f90ae7"}
            }"#,
        )
        .unwrap();

        assert_eq!(product.kind, ProductKind::Toy);
        assert_eq!(product.sizes, vec![ProductSize::S, ProductSize::M]);
        assert_eq!(product.images, vec!["rope.jpg"]);
        assert!(product.user.is_some());
    }

    #[test]
    fn test_payload_serializes_only_whitelisted_fields() {
        let draft = ProductDraft {
            title: "Rope Tug".to_owned(),
            slug: "rope_tug".to_owned(),
            price: Decimal::new(1250, 2),
            stock: 7,
            sizes: vec![ProductSize::S],
            kind: Some(ProductKind::Toy),
            species: None,
            tags: vec!["chew".to_owned()],
            images: Vec::new(),
        };
        let payload = ProductPayload::new(&draft, ProductKind::Toy, vec!["a.jpg".to_owned()]);

        let value = serde_json::to_value(&payload).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["images", "price", "sizes", "slug", "stock", "tags", "title", "type"]
        );
        // client-only fields never serialize
        assert!(!keys.contains(&"id"));
        assert!(!keys.contains(&"owner"));
    }

    #[test]
    fn test_payload_merges_kept_and_uploaded_images() {
        let draft = ProductDraft {
            images: vec!["http://localhost:3000/api/files/product/kept.jpg".to_owned()],
            ..Default::default()
        };
        let merged = merge_image_filenames(
            &draft.images,
            vec!["up-1.jpg".to_owned(), "up-2.jpg".to_owned()],
        );
        assert_eq!(merged, vec!["kept.jpg", "up-1.jpg", "up-2.jpg"]);
    }
}
