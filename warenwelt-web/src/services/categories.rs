use shared::models::{ProductCategoryCreate, ProductCategoryRead, ProductCategoryUpdate};

use crate::api::{ApiClient, ApiError, require_id};

impl ApiClient {
    pub async fn list_product_categories(&self) -> Result<Vec<ProductCategoryRead>, ApiError> {
        self.get_json("product-categories").await
    }

    pub async fn get_product_category(&self, id: i64) -> Result<ProductCategoryRead, ApiError> {
        let id = require_id(id, "category_id")?;
        self.get_json(&format!("product-categories/{id}")).await
    }

    pub async fn create_product_category(
        &self,
        payload: &ProductCategoryCreate,
    ) -> Result<ProductCategoryRead, ApiError> {
        self.post_json("product-categories", payload).await
    }

    pub async fn update_product_category(
        &self,
        id: i64,
        payload: &ProductCategoryUpdate,
    ) -> Result<ProductCategoryRead, ApiError> {
        let id = require_id(id, "category_id")?;
        self.put_json(&format!("product-categories/{id}"), payload)
            .await
    }

    pub async fn delete_product_category(&self, id: i64) -> Result<(), ApiError> {
        let id = require_id(id, "category_id")?;
        self.delete(&format!("product-categories/{id}")).await
    }
}
