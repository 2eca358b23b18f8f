use chrono::NaiveDate;
use shared::models::{DailySummaryReport, PeriodSummaryReport, RevenueListReport};

use crate::api::{ApiClient, ApiError};

impl ApiClient {
    pub async fn get_daily_summary_report(
        &self,
        report_date: NaiveDate,
    ) -> Result<DailySummaryReport, ApiError> {
        self.get_json_with(
            "reports/sales/summary/daily",
            &[("report_date", report_date.to_string())],
        )
        .await
    }

    /// Summary for the calendar week containing the given date.
    pub async fn get_weekly_summary_report(
        &self,
        target_date_for_week: NaiveDate,
    ) -> Result<PeriodSummaryReport, ApiError> {
        self.get_json_with(
            "reports/sales/summary/weekly",
            &[("target_date_for_week", target_date_for_week.to_string())],
        )
        .await
    }

    pub async fn get_monthly_summary_report(
        &self,
        year: i32,
        month: u32,
    ) -> Result<PeriodSummaryReport, ApiError> {
        check_month(month)?;
        self.get_json_with(
            "reports/sales/summary/monthly",
            &[("year", year.to_string()), ("month", month.to_string())],
        )
        .await
    }

    pub async fn get_revenue_list_report(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<RevenueListReport, ApiError> {
        check_period(start_date, end_date)?;
        self.get_json_with(
            "reports/revenue/list",
            &[
                ("start_date", start_date.to_string()),
                ("end_date", end_date.to_string()),
            ],
        )
        .await
    }

    pub async fn download_daily_summary_csv(
        &self,
        report_date: NaiveDate,
    ) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(
            "reports/export/daily-sales-summary/csv",
            &[("report_date", report_date.to_string())],
        )
        .await
    }

    pub async fn download_monthly_summary_csv(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<u8>, ApiError> {
        check_month(month)?;
        self.get_bytes(
            "reports/export/monthly-sales-summary/csv",
            &[("year", year.to_string()), ("month", month.to_string())],
        )
        .await
    }

    /// Revenue line export in the DATEV-oriented column layout the tax
    /// consultant expects.
    pub async fn download_revenue_list_csv(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<u8>, ApiError> {
        check_period(start_date, end_date)?;
        self.get_bytes(
            "reports/export/revenue-list/datev-like/csv",
            &[
                ("start_date", start_date.to_string()),
                ("end_date", end_date.to_string()),
            ],
        )
        .await
    }
}

fn check_month(month: u32) -> Result<(), ApiError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ApiError::InvalidParameter("month"))
    }
}

fn check_period(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), ApiError> {
    if start_date <= end_date {
        Ok(())
    } else {
        Err(ApiError::InvalidParameter("start_date"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that out-of-range months never reach the server.
    #[test]
    fn test_check_month_bounds() {
        assert!(check_month(1).is_ok());
        assert!(check_month(12).is_ok());
        assert!(check_month(0).is_err());
        assert!(check_month(13).is_err());
    }

    /// Test that inverted report periods are rejected locally.
    #[test]
    fn test_check_period_order() {
        let july_first = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let july_last = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
        assert!(check_period(july_first, july_last).is_ok());
        assert!(check_period(july_first, july_first).is_ok());
        assert!(check_period(july_last, july_first).is_err());
    }
}
