use chrono::NaiveDate;
use shared::models::{DailySummaryReport, SaleCreate, SaleRead};

use crate::api::{ApiClient, ApiError, require_id};

impl ApiClient {
    /// Record a register transaction. The back end resolves the items,
    /// snapshots prices and answers with the completed sale.
    pub async fn create_sale(&self, payload: &SaleCreate) -> Result<SaleRead, ApiError> {
        if payload.items.is_empty() {
            return Err(ApiError::InvalidParameter("items"));
        }
        self.post_json("sales", payload).await
    }

    pub async fn list_sales(&self) -> Result<Vec<SaleRead>, ApiError> {
        self.get_json("sales").await
    }

    pub async fn get_sale(&self, id: i64) -> Result<SaleRead, ApiError> {
        let id = require_id(id, "sale_id")?;
        self.get_json(&format!("sales/{id}")).await
    }

    /// Today's register totals, as shown on the dashboard.
    pub async fn get_daily_sales_summary(
        &self,
        report_date: NaiveDate,
    ) -> Result<DailySummaryReport, ApiError> {
        self.get_json_with(
            "sales/summary/daily",
            &[("report_date", report_date.to_string())],
        )
        .await
    }
}
