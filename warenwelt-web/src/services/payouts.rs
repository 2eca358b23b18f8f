use shared::models::{PayoutCreate, PayoutRead, SupplierPayoutSummary};

use crate::api::{ApiClient, ApiError, require_id};

impl ApiClient {
    /// What the supplier is currently owed, with a preview of the open items.
    pub async fn get_payout_summary(
        &self,
        supplier_id: i64,
    ) -> Result<SupplierPayoutSummary, ApiError> {
        let supplier_id = require_id(supplier_id, "supplier_id")?;
        self.get_json(&format!("payouts/summary/{supplier_id}"))
            .await
    }

    /// Pay out everything the supplier is owed in one go.
    pub async fn create_payout(&self, payload: &PayoutCreate) -> Result<PayoutRead, ApiError> {
        require_id(payload.supplier_id, "supplier_id")?;
        self.post_json("payouts", payload).await
    }

    pub async fn list_payouts(&self) -> Result<Vec<PayoutRead>, ApiError> {
        self.get_json("payouts").await
    }

    pub async fn get_payout(&self, id: i64) -> Result<PayoutRead, ApiError> {
        let id = require_id(id, "payout_id")?;
        self.get_json(&format!("payouts/{id}")).await
    }
}
