//! # Product Access Functions
//!
//! Catalog operations over hoses: creation with nested features, the
//! eager-loaded detail view, dimension-filtered listing, updates, hard
//! deletes, and the purchase-platform lookup.
//!
//! ## Listing Filter
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    list_products Filtering                              │
//! │                                                                         │
//! │  ProductFilter { hoseDiameterMin, hoseDiameterMax,                      │
//! │                  hoseLengthMin,   hoseLengthMax }                       │
//! │       │                                                                 │
//! │       ▼  every bound optional and independent                           │
//! │  SELECT ... WHERE diameter >= ? AND diameter <= ?                      │
//! │              AND length   >= ? AND length   <= ?                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Each product carries its purchase options.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::compatibilities::CompatibilityDto;
use crate::error::{ServiceError, ServiceResult};
use crate::measurements::MeasurementSummaryDto;
use hose_core::validation::validate_dimension;
use hose_core::{Hose, PurchaseOption, UsageLog};
use hose_db::{generate_id, Database, HoseFilter};

// =============================================================================
// Schemas
// =============================================================================

/// A purchase channel as presented in product views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOptionDto {
    pub platform: String,
    pub price: f64,
    pub currency: String,
    pub available: bool,
    pub link: String,
}

impl From<PurchaseOption> for PurchaseOptionDto {
    fn from(o: PurchaseOption) -> Self {
        PurchaseOptionDto {
            platform: o.platform,
            price: o.price,
            currency: o.currency,
            available: o.available,
            link: o.link,
        }
    }
}

/// A free-form usage record as presented in product and user views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLogDto {
    pub id: String,
    pub hose_id: Option<String>,
    pub user_id: Option<String>,
    pub information: String,
    pub created_at: DateTime<Utc>,
}

impl From<UsageLog> for UsageLogDto {
    fn from(l: UsageLog) -> Self {
        UsageLogDto {
            id: l.id,
            hose_id: l.hose_id,
            user_id: l.user_id,
            information: l.information,
            created_at: l.created_at,
        }
    }
}

/// Response for a hose creation attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub hose_id: String,
    pub message: String,
}

/// A hose with every related collection eager-loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailDto {
    pub id: String,
    pub length: f64,
    pub diameter: f64,
    pub measurements: Vec<MeasurementSummaryDto>,
    pub compatibilities: Vec<CompatibilityDto>,
    pub purchase_options: Vec<PurchaseOptionDto>,
    pub usage_logs: Vec<UsageLogDto>,
}

/// Response wrapping the eager-loaded product detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetailsResponse {
    pub product: ProductDetailDto,
}

/// Optional dimension bounds accepted by the product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub hose_diameter_min: Option<f64>,
    pub hose_diameter_max: Option<f64>,
    pub hose_length_min: Option<f64>,
    pub hose_length_max: Option<f64>,
}

impl From<&ProductFilter> for HoseFilter {
    fn from(f: &ProductFilter) -> Self {
        HoseFilter {
            min_diameter: f.hose_diameter_min,
            max_diameter: f.hose_diameter_max,
            min_length: f.hose_length_min,
            max_length: f.hose_length_max,
        }
    }
}

/// One listing row: the hose with its purchase options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryDto {
    pub id: String,
    pub length: f64,
    pub diameter: f64,
    pub purchase_options: Vec<PurchaseOptionDto>,
}

/// Response for the product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsListResponse {
    pub products: Vec<ProductSummaryDto>,
}

/// Updatable display attributes submitted to `update_product`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

/// The product state echoed back after an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

/// Response wrapping the echoed post-update product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateResponse {
    pub updated_product: ProductDto,
}

/// Response confirming a product deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProductResponse {
    pub message: String,
}

/// One purchasing channel in the platform lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub link: String,
}

/// Response for the purchase-platform lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPurchasePlatformsResponse {
    pub platforms: Vec<PlatformInfo>,
}

// =============================================================================
// Operations
// =============================================================================

/// Creates a new hose with nested feature rows.
///
/// Dimensions must be positive and finite; the hose and its features are
/// written in one transaction.
pub async fn create_product(
    db: &Database,
    length: f64,
    diameter: f64,
    features: Vec<String>,
) -> ServiceResult<CreateProductResponse> {
    debug!(length = %length, diameter = %diameter, "create_product");

    validate_dimension("length", length)?;
    validate_dimension("diameter", diameter)?;

    let now = Utc::now();
    let hose = Hose {
        id: generate_id(),
        length,
        diameter,
        created_at: now,
        updated_at: now,
    };
    db.hoses().insert(&hose, &features).await?;

    info!(hose_id = %hose.id, "Hose created");
    Ok(CreateProductResponse {
        hose_id: hose.id,
        message: "Successfully created new hose.".to_string(),
    })
}

/// Fetches one hose with measurements, compatibilities, purchase options,
/// and usage logs eager-loaded.
pub async fn get_product_details(
    db: &Database,
    product_id: &str,
) -> ServiceResult<ProductDetailsResponse> {
    debug!(product_id = %product_id, "get_product_details");

    let hose = db
        .hoses()
        .find_by_id(product_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

    let measurements = db
        .measurements()
        .list_for_hose(&hose.id)
        .await?
        .into_iter()
        .map(MeasurementSummaryDto::from)
        .collect();
    let compatibilities = db
        .compatibilities()
        .list_for_hose(&hose.id)
        .await?
        .into_iter()
        .map(CompatibilityDto::from)
        .collect();
    let purchase_options = db
        .purchase_options()
        .list_for_hose(&hose.id)
        .await?
        .into_iter()
        .map(PurchaseOptionDto::from)
        .collect();
    let usage_logs = db
        .usage_logs()
        .list_for_hose(&hose.id)
        .await?
        .into_iter()
        .map(UsageLogDto::from)
        .collect();

    Ok(ProductDetailsResponse {
        product: ProductDetailDto {
            id: hose.id,
            length: hose.length,
            diameter: hose.diameter,
            measurements,
            compatibilities,
            purchase_options,
            usage_logs,
        },
    })
}

/// Lists hoses matching the optional dimension bounds, each with its
/// purchase options.
pub async fn list_products(
    db: &Database,
    filter: &ProductFilter,
) -> ServiceResult<ProductsListResponse> {
    debug!(?filter, "list_products");

    let hoses = db.hoses().list_filtered(&filter.into()).await?;

    let mut products = Vec::with_capacity(hoses.len());
    for hose in hoses {
        let purchase_options = db
            .purchase_options()
            .list_for_hose(&hose.id)
            .await?
            .into_iter()
            .map(PurchaseOptionDto::from)
            .collect();
        products.push(ProductSummaryDto {
            id: hose.id,
            length: hose.length,
            diameter: hose.diameter,
            purchase_options,
        });
    }

    Ok(ProductsListResponse { products })
}

/// Updates a product's display attributes.
///
/// Of the submitted fields only `price` is persisted, into the hose
/// `length` column; the response echoes everything back regardless.
pub async fn update_product(
    db: &Database,
    product_id: &str,
    details: ProductDetails,
) -> ServiceResult<ProductUpdateResponse> {
    debug!(product_id = %product_id, "update_product");

    let hose = db
        .hoses()
        .find_by_id(product_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

    db.hoses().set_length(&hose.id, details.price).await?;

    info!(hose_id = %hose.id, "Product updated");
    Ok(ProductUpdateResponse {
        updated_product: ProductDto {
            id: hose.id,
            name: details.name,
            description: details.description,
            price: details.price,
            available: details.available,
        },
    })
}

/// Permanently removes a product from the catalog.
pub async fn delete_product(
    db: &Database,
    product_id: &str,
) -> ServiceResult<DeleteProductResponse> {
    debug!(product_id = %product_id, "delete_product");

    db.hoses().delete(product_id).await?;

    info!(product_id = %product_id, "Product deleted");
    Ok(DeleteProductResponse {
        message: "Product deleted successfully.".to_string(),
    })
}

/// Retrieves the available purchasing channels for a product.
///
/// `user_location` is accepted for region-specific pricing but does not
/// affect the lookup.
pub async fn get_purchase_platforms(
    db: &Database,
    product_id: &str,
    user_location: Option<&str>,
) -> ServiceResult<GetPurchasePlatformsResponse> {
    debug!(product_id = %product_id, ?user_location, "get_purchase_platforms");

    let options = db.purchase_options().list_available_for_hose(product_id).await?;

    let platforms = options
        .into_iter()
        .map(|o| PlatformInfo {
            name: o.platform,
            price: o.price,
            currency: o.currency,
            link: o.link,
        })
        .collect();

    Ok(GetPurchasePlatformsResponse { platforms })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_hose, seed_purchase_option, test_db};

    #[tokio::test]
    async fn test_create_product_with_features() {
        let db = test_db().await;

        let created = create_product(&db, 15.0, 1.9, vec!["kink-resistant".to_string()])
            .await
            .unwrap();
        assert_eq!(created.message, "Successfully created new hose.");

        let details = get_product_details(&db, &created.hose_id).await.unwrap();
        assert_eq!(details.product.length, 15.0);
        assert_eq!(details.product.diameter, 1.9);
        assert!(details.product.purchase_options.is_empty());
    }

    #[tokio::test]
    async fn test_create_product_rejects_bad_dimensions() {
        let db = test_db().await;

        let err = create_product(&db, 0.0, 1.9, vec![]).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = create_product(&db, 10.0, f64::NAN, vec![]).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let db = test_db().await;

        let err = get_product_details(&db, "missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_products_filter_bounds() {
        let db = test_db().await;
        seed_hose(&db, 10.0, 1.3).await;
        seed_hose(&db, 25.0, 1.9).await;
        seed_hose(&db, 50.0, 2.5).await;

        // Single bound leaves the other dimension unconstrained
        let filter = ProductFilter {
            hose_diameter_min: Some(1.9),
            ..Default::default()
        };
        let listed = list_products(&db, &filter).await.unwrap();
        assert_eq!(listed.products.len(), 2);

        // Both length bounds applied together
        let filter = ProductFilter {
            hose_length_min: Some(20.0),
            hose_length_max: Some(30.0),
            ..Default::default()
        };
        let listed = list_products(&db, &filter).await.unwrap();
        assert_eq!(listed.products.len(), 1);
        assert_eq!(listed.products[0].length, 25.0);

        // Empty filter returns everything
        let listed = list_products(&db, &ProductFilter::default()).await.unwrap();
        assert_eq!(listed.products.len(), 3);
    }

    #[tokio::test]
    async fn test_update_product_persists_only_price_into_length() {
        let db = test_db().await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;

        let details = ProductDetails {
            name: "Garden Pro".to_string(),
            description: "Flexible".to_string(),
            price: 42.5,
            available: true,
        };
        let updated = update_product(&db, &hose_id, details).await.unwrap();

        // Response echoes every submitted field
        assert_eq!(updated.updated_product.name, "Garden Pro");
        assert_eq!(updated.updated_product.price, 42.5);

        // Storage: length took the price, diameter untouched
        let stored = db.hoses().find_by_id(&hose_id).await.unwrap().unwrap();
        assert_eq!(stored.length, 42.5);
        assert_eq!(stored.diameter, 1.9);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let db = test_db().await;

        let details = ProductDetails {
            name: String::new(),
            description: String::new(),
            price: 1.0,
            available: false,
        };
        let err = update_product(&db, "missing", details).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_product_then_missing() {
        let db = test_db().await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;

        delete_product(&db, &hose_id).await.unwrap();
        let err = delete_product(&db, &hose_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_purchase_platforms_only_available() {
        let db = test_db().await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;
        seed_purchase_option(&db, &hose_id, "GardenMart", true).await;
        seed_purchase_option(&db, &hose_id, "HoseDepot", false).await;

        let platforms = get_purchase_platforms(&db, &hose_id, Some("EU"))
            .await
            .unwrap();
        assert_eq!(platforms.platforms.len(), 1);
        assert_eq!(platforms.platforms[0].name, "GardenMart");
    }
}
