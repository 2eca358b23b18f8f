use shared::models::{ShelfCreate, ShelfRead, ShelfUpdate};

use crate::api::{ApiClient, ApiError, require_id};

impl ApiClient {
    pub async fn list_shelves(&self) -> Result<Vec<ShelfRead>, ApiError> {
        self.get_json("shelves").await
    }

    pub async fn get_shelf(&self, id: i64) -> Result<ShelfRead, ApiError> {
        let id = require_id(id, "shelf_id")?;
        self.get_json(&format!("shelves/{id}")).await
    }

    pub async fn create_shelf(&self, payload: &ShelfCreate) -> Result<ShelfRead, ApiError> {
        self.post_json("shelves", payload).await
    }

    pub async fn update_shelf(&self, id: i64, payload: &ShelfUpdate) -> Result<ShelfRead, ApiError> {
        let id = require_id(id, "shelf_id")?;
        self.put_json(&format!("shelves/{id}"), payload).await
    }

    pub async fn delete_shelf(&self, id: i64) -> Result<(), ApiError> {
        let id = require_id(id, "shelf_id")?;
        self.delete(&format!("shelves/{id}")).await
    }
}
