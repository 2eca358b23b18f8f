use shared::models::{SupplierCreate, SupplierRead, SupplierUpdate};

use crate::api::{ApiClient, ApiError, require_id};

impl ApiClient {
    pub async fn list_suppliers(&self) -> Result<Vec<SupplierRead>, ApiError> {
        self.get_json("suppliers").await
    }

    pub async fn get_supplier(&self, id: i64) -> Result<SupplierRead, ApiError> {
        let id = require_id(id, "supplier_id")?;
        self.get_json(&format!("suppliers/{id}")).await
    }

    pub async fn create_supplier(&self, payload: &SupplierCreate) -> Result<SupplierRead, ApiError> {
        self.post_json("suppliers", payload).await
    }

    pub async fn update_supplier(
        &self,
        id: i64,
        payload: &SupplierUpdate,
    ) -> Result<SupplierRead, ApiError> {
        let id = require_id(id, "supplier_id")?;
        self.put_json(&format!("suppliers/{id}"), payload).await
    }

    pub async fn delete_supplier(&self, id: i64) -> Result<(), ApiError> {
        let id = require_id(id, "supplier_id")?;
        self.delete(&format!("suppliers/{id}")).await
    }
}
