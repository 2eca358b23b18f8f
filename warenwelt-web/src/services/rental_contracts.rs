use shared::models::{RentalContractCreate, RentalContractRead, RentalContractUpdate};

use crate::api::{ApiClient, ApiError, require_id};

impl ApiClient {
    pub async fn list_rental_contracts(&self) -> Result<Vec<RentalContractRead>, ApiError> {
        self.get_json("rental-contracts").await
    }

    pub async fn get_rental_contract(&self, id: i64) -> Result<RentalContractRead, ApiError> {
        let id = require_id(id, "contract_id")?;
        self.get_json(&format!("rental-contracts/{id}")).await
    }

    pub async fn create_rental_contract(
        &self,
        payload: &RentalContractCreate,
    ) -> Result<RentalContractRead, ApiError> {
        self.post_json("rental-contracts", payload).await
    }

    pub async fn update_rental_contract(
        &self,
        id: i64,
        payload: &RentalContractUpdate,
    ) -> Result<RentalContractRead, ApiError> {
        let id = require_id(id, "contract_id")?;
        self.put_json(&format!("rental-contracts/{id}"), payload)
            .await
    }

    pub async fn delete_rental_contract(&self, id: i64) -> Result<(), ApiError> {
        let id = require_id(id, "contract_id")?;
        self.delete(&format!("rental-contracts/{id}")).await
    }
}
