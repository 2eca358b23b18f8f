use reqwest::multipart::{Form, Part};
use shared::models::{PriceTagData, ProductCreate, ProductRead, ProductUpdate, TaxRateRead};

use crate::api::{ApiClient, ApiError, require_id};

impl ApiClient {
    pub async fn list_products(&self) -> Result<Vec<ProductRead>, ApiError> {
        self.get_json("products").await
    }

    pub async fn get_product(&self, id: i64) -> Result<ProductRead, ApiError> {
        let id = require_id(id, "product_id")?;
        self.get_json(&format!("products/{id}")).await
    }

    /// Look an article up by its SKU, the scanner path at the register.
    pub async fn get_product_by_sku(&self, sku: &str) -> Result<ProductRead, ApiError> {
        let sku = sku.trim();
        if sku.is_empty() {
            return Err(ApiError::InvalidParameter("sku"));
        }
        self.get_json(&format!("products/sku/{sku}")).await
    }

    pub async fn create_product(&self, payload: &ProductCreate) -> Result<ProductRead, ApiError> {
        self.post_json("products", payload).await
    }

    pub async fn update_product(
        &self,
        id: i64,
        payload: &ProductUpdate,
    ) -> Result<ProductRead, ApiError> {
        let id = require_id(id, "product_id")?;
        self.put_json(&format!("products/{id}"), payload).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        let id = require_id(id, "product_id")?;
        self.delete(&format!("products/{id}")).await
    }

    /// Attach a photo to an article. Returns the article with its new
    /// `image_url`.
    pub async fn upload_product_image(
        &self,
        id: i64,
        file_name: String,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<ProductRead, ApiError> {
        let id = require_id(id, "product_id")?;
        let part = Part::bytes(bytes).file_name(file_name).mime_str(mime_type)?;
        let form = Form::new().part("file", part);
        self.post_multipart(&format!("products/{id}/upload-image"), form)
            .await
    }

    pub async fn get_price_tag_data(&self, id: i64) -> Result<PriceTagData, ApiError> {
        let id = require_id(id, "product_id")?;
        self.get_json(&format!("products/{id}/price-tag")).await
    }

    /// VAT rates for the article form select. Maintained server-side only.
    pub async fn list_tax_rates(&self) -> Result<Vec<TaxRateRead>, ApiError> {
        self.get_json("tax-rates").await
    }
}
