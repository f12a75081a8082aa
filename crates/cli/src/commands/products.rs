//! Product browsing and management commands.

use std::path::PathBuf;

use clap::Subcommand;
use rust_decimal::Decimal;

use pawmart_client::api::ProductFilter;
use pawmart_client::api::files::ImageUpload;
use pawmart_client::api::products::DEFAULT_PAGE_SIZE;
use pawmart_client::types::{Product, ProductDraft};
use pawmart_core::{ProductId, ProductKey, ProductKind, ProductSize, Species};

use super::{CliError, Context};

#[derive(Subcommand)]
pub enum ProductAction {
    /// List products with optional filters
    List {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Items per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,

        /// Price range key (0-25, 25-50, 50-100, 100-200, 200+, any)
        #[arg(long, default_value = "any")]
        price_range: String,

        /// Restrict to one species
        #[arg(long)]
        species: Option<Species>,

        /// Free-text search
        #[arg(long)]
        query: Option<String>,
    },
    /// Show one product ("new" shows an empty draft)
    Show {
        /// Product ID, or "new"
        key: ProductKey,
    },
    /// Create a product (admin)
    Create {
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Update a product (admin)
    Update {
        /// Product ID
        id: ProductId,

        #[command(flatten)]
        fields: ProductFields,
    },
}

/// Editable product fields shared by create and update.
#[derive(clap::Args)]
pub struct ProductFields {
    #[arg(long)]
    title: String,

    #[arg(long)]
    slug: String,

    #[arg(long)]
    price: Decimal,

    #[arg(long, default_value_t = 0)]
    stock: u32,

    /// Product kind (food, toy, accessory, hygiene)
    #[arg(long)]
    kind: ProductKind,

    /// Species the product targets
    #[arg(long)]
    species: Option<Species>,

    /// Size variant; repeat for several
    #[arg(long = "size")]
    sizes: Vec<ProductSize>,

    /// Free-text tag; repeat for several
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Existing image URL or filename to keep; repeat for several
    #[arg(long = "keep-image")]
    keep_images: Vec<String>,

    /// New image file to upload; repeat for several
    #[arg(long = "image")]
    images: Vec<PathBuf>,
}

impl ProductFields {
    fn into_draft_and_uploads(self) -> Result<(ProductDraft, Vec<ImageUpload>), CliError> {
        let uploads = self
            .images
            .iter()
            .map(|path| ImageUpload::from_path(path))
            .collect::<Result<Vec<_>, _>>()?;

        let draft = ProductDraft {
            title: self.title,
            slug: self.slug,
            price: self.price,
            stock: self.stock,
            sizes: self.sizes,
            kind: Some(self.kind),
            species: self.species,
            tags: self.tags,
            images: self.keep_images,
        };

        Ok((draft, uploads))
    }
}

pub async fn run(ctx: &Context, action: ProductAction) -> Result<(), CliError> {
    match action {
        ProductAction::List {
            page,
            limit,
            price_range,
            species,
            query,
        } => {
            let filter = ProductFilter {
                page,
                limit,
                price_range,
                species,
                query,
            };
            let result = ctx.products.get_products(&filter).await?;

            tracing::info!(
                "{} products (page {}/{}, {} total)",
                result.products.len(),
                page,
                result.pages,
                result.total
            );
            for product in &result.products {
                describe(product);
            }
            Ok(())
        }
        ProductAction::Show { key } => {
            let product = ctx.products.get_product(&key).await?;
            describe(&product);
            for image in &product.images {
                tracing::info!("  image: {image}");
            }
            Ok(())
        }
        ProductAction::Create { fields } => {
            let (draft, uploads) = fields.into_draft_and_uploads()?;
            let product = ctx.products.create_product(&draft, uploads).await?;
            tracing::info!("Created product {} ({})", product.title, product.id);
            Ok(())
        }
        ProductAction::Update { id, fields } => {
            let (draft, uploads) = fields.into_draft_and_uploads()?;
            let product = ctx.products.update_product(id, &draft, uploads).await?;
            tracing::info!("Updated product {} ({})", product.title, product.id);
            Ok(())
        }
    }
}

fn describe(product: &Product) {
    tracing::info!(
        "{} [{}] {} - stock {}, {} image(s)",
        product.id,
        product.slug,
        product.price,
        product.stock,
        product.images.len()
    );
}
