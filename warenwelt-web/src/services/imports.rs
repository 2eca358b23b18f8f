use reqwest::multipart::{Form, Part};
use shared::models::ImportResult;

use crate::api::{ApiClient, ApiError};

impl ApiClient {
    /// Bulk-load suppliers from a CSV file.
    pub async fn import_suppliers_csv(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<ImportResult, ApiError> {
        self.post_csv("import/suppliers/csv", file_name, bytes).await
    }

    /// Bulk-load products from a CSV file.
    pub async fn import_products_csv(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<ImportResult, ApiError> {
        self.post_csv("import/products/csv", file_name, bytes).await
    }

    async fn post_csv(
        &self,
        path: &str,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<ImportResult, ApiError> {
        if file_name.trim().is_empty() {
            return Err(ApiError::InvalidParameter("file_name"));
        }
        let part = Part::bytes(bytes).file_name(file_name).mime_str("text/csv")?;
        let form = Form::new().part("csv_file", part);
        self.post_multipart(path, form).await
    }
}
