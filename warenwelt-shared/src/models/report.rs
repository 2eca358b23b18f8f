use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Totals for one payment method within a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethodSummary {
    pub payment_method: String,
    pub total_amount: f64,
    pub transaction_count: i64,
}

/// Sales summary for a single day (the "Tageslosung").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummaryReport {
    pub report_date: NaiveDate,
    pub overall_total_amount: f64,
    pub overall_transaction_count: i64,
    pub summary_by_payment_method: Vec<PaymentMethodSummary>,
}

/// Sales summary for a week or a month.
///
/// `report_type` is `WEEKLY` or `MONTHLY` as reported by the back end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummaryReport {
    pub report_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub overall_total_amount: f64,
    pub overall_transaction_count: i64,
    pub summary_by_payment_method: Vec<PaymentMethodSummary>,
    pub total_commission_paid_to_suppliers: f64,
}

/// One sold item line in the revenue list report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueItem {
    pub product_id: i64,
    pub product_sku: String,
    pub product_name: String,
    pub product_type: String,
    pub quantity_sold: i64,
    pub price_per_unit_at_sale: f64,
    pub total_gross_revenue_for_item: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price_per_unit: Option<f64>,
    pub total_cost_or_commission_for_item: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate_percentage_at_sale: Option<f64>,
    pub sale_id: i64,
    pub transaction_number: String,
    pub sale_transaction_time: NaiveDateTime,
}

/// Aggregated revenue for one product type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueProductTypeSummary {
    pub total_revenue: f64,
    pub total_cost_or_commission: f64,
    pub item_count: i64,
}

/// Line by line revenue breakdown for a period, keyed extras by product type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueListReport {
    pub report_generated_at: NaiveDateTime,
    pub report_period_start_date: NaiveDate,
    pub report_period_end_date: NaiveDate,
    pub total_gross_revenue_all_items: f64,
    pub total_items_sold: i64,
    #[serde(default)]
    pub summary_by_product_type: HashMap<String, RevenueProductTypeSummary>,
    #[serde(default)]
    pub revenue_items: Vec<RevenueItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_summary_deserializes_api_shape() {
        let json = r#"{
            "report_date": "2024-07-28",
            "overall_total_amount": 142.5,
            "overall_transaction_count": 6,
            "summary_by_payment_method": [
                {"payment_method": "CARD", "total_amount": 40.0, "transaction_count": 2},
                {"payment_method": "CASH", "total_amount": 102.5, "transaction_count": 4}
            ]
        }"#;
        let report: DailySummaryReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.overall_transaction_count, 6);
        assert_eq!(report.summary_by_payment_method[0].payment_method, "CARD");
    }

    #[test]
    fn period_summary_deserializes_api_shape() {
        let json = r#"{
            "report_type": "MONTHLY",
            "start_date": "2024-07-01",
            "end_date": "2024-07-31",
            "overall_total_amount": 1204.0,
            "overall_transaction_count": 58,
            "summary_by_payment_method": [],
            "total_commission_paid_to_suppliers": 377.25
        }"#;
        let report: PeriodSummaryReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.report_type, "MONTHLY");
        assert!((report.total_commission_paid_to_suppliers - 377.25).abs() < f64::EPSILON);
    }

    #[test]
    fn revenue_list_deserializes_api_shape() {
        let json = r#"{
            "report_generated_at": "2024-08-01T09:00:00",
            "report_period_start_date": "2024-07-01",
            "report_period_end_date": "2024-07-31",
            "total_gross_revenue_all_items": 1204.0,
            "total_items_sold": 61,
            "summary_by_product_type": {
                "COMMISSION": {
                    "total_revenue": 900.0,
                    "total_cost_or_commission": 377.25,
                    "item_count": 48
                },
                "NEW_WARE": {
                    "total_revenue": 304.0,
                    "total_cost_or_commission": 120.0,
                    "item_count": 13
                }
            },
            "revenue_items": [
                {
                    "product_id": 3,
                    "product_sku": "WW-000003",
                    "product_name": "Vase, blau",
                    "product_type": "COMMISSION",
                    "quantity_sold": 1,
                    "price_per_unit_at_sale": 27.5,
                    "total_gross_revenue_for_item": 27.5,
                    "purchase_price_per_unit": 11.0,
                    "total_cost_or_commission_for_item": 11.0,
                    "tax_rate_percentage_at_sale": 19.0,
                    "sale_id": 9,
                    "transaction_number": "TRX-0A1B2C3D4E5F",
                    "sale_transaction_time": "2024-07-04T13:37:00"
                }
            ]
        }"#;
        let report: RevenueListReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.revenue_items.len(), 1);
        assert_eq!(report.summary_by_product_type["COMMISSION"].item_count, 48);
        assert_eq!(
            report.revenue_items[0].tax_rate_percentage_at_sale,
            Some(19.0)
        );
    }
}
