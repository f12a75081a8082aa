//! Product type conversion functions.

use pawmart_core::Price;

use crate::api::products::ApiProduct;
use crate::types::Product;

use super::DEFAULT_CURRENCY;

/// Rewrite a transport image reference into its absolute display URL.
///
/// Backend payloads store bare filenames; an image that already carries a
/// scheme passes through unchanged, so re-mapping is a no-op.
#[must_use]
pub fn image_url_to_domain(base_url: &str, image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        return image.to_owned();
    }
    format!("{}/files/product/{image}", base_url.trim_end_matches('/'))
}

/// Reduce an image reference to the bare filename the backend stores.
///
/// Absolute URLs lose scheme, host and path; bare filenames pass through
/// unchanged, so re-mapping is a no-op.
#[must_use]
pub fn image_url_to_api(image: &str) -> String {
    image.rsplit('/').next().unwrap_or(image).to_owned()
}

/// Merge kept images (reduced to filenames) with freshly uploaded
/// filenames into the ordered list sent to the backend.
#[must_use]
pub fn merge_image_filenames(kept: &[String], uploaded: Vec<String>) -> Vec<String> {
    kept.iter()
        .map(|image| image_url_to_api(image))
        .chain(uploaded)
        .collect()
}

/// Convert a transport product into its domain form.
pub(crate) fn convert_product(product: ApiProduct, base_url: &str) -> Product {
    Product {
        id: product.id,
        title: product.title,
        slug: product.slug,
        price: Price::new(product.price, DEFAULT_CURRENCY),
        stock: product.stock,
        sizes: product.sizes,
        kind: product.kind,
        species: product.species,
        tags: product.tags,
        images: product
            .images
            .iter()
            .map(|image| image_url_to_domain(base_url, image))
            .collect(),
        owner: product.user.map(|u| u.id),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000/api";

    #[test]
    fn test_bare_filename_roundtrips_both_ways() {
        let filename = "1740250-00-A_0_2000.jpg";

        let domain = image_url_to_domain(BASE, filename);
        assert_eq!(domain, "http://localhost:3000/api/files/product/1740250-00-A_0_2000.jpg");
        assert_eq!(image_url_to_api(&domain), filename);

        // to_api over a bare filename is a no-op, so both compositions hold
        assert_eq!(image_url_to_api(filename), filename);
        assert_eq!(
            image_url_to_domain(BASE, &image_url_to_api(filename)),
            domain
        );
    }

    #[test]
    fn test_absolute_url_to_domain_is_noop() {
        let url = "https://cdn.example.com/files/product/leash.png";
        assert_eq!(image_url_to_domain(BASE, url), url);
    }

    #[test]
    fn test_to_domain_is_idempotent() {
        let once = image_url_to_domain(BASE, "collar.webp");
        let twice = image_url_to_domain(BASE, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_keeps_order_and_reduces_kept_urls() {
        let kept = vec!["http://localhost:3000/api/files/product/old.jpg".to_owned()];
        let uploaded = vec!["new-1.jpg".to_owned(), "new-2.jpg".to_owned()];

        let merged = merge_image_filenames(&kept, uploaded);
        assert_eq!(merged, vec!["old.jpg", "new-1.jpg", "new-2.jpg"]);
    }

    #[test]
    fn test_merge_with_no_uploads() {
        let kept = vec!["a.jpg".to_owned(), "b.jpg".to_owned()];
        assert_eq!(merge_image_filenames(&kept, Vec::new()), kept);
    }
}
