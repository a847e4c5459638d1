use serde::{Deserialize, Serialize};

use crate::{FieldValue, ListRecord, RecordSchema, SchemaField, TypedRecord};
use marketdesk_types::RecordId;

/// Period-over-period change shown under a dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendData {
    pub value: f64,
    pub is_positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    pub vendors: TrendData,
    pub products: TrendData,
    pub orders: TrendData,
    pub revenue: TrendData,
}

/// Summary served by `/api/dashboard/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_vendors: u64,
    #[serde(default)]
    pub active_vendors: Option<u64>,
    pub total_products: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub trends: Trends,
    #[serde(default)]
    pub recent_orders: Vec<RecentOrder>,
}

/// One row of the "recent orders" table.
///
/// `total` is preformatted by the server and `date` is free-form, so both
/// stay strings; the list engine parses them on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: RecordId,
    pub customer: String,
    pub status: String,
    pub total: String,
    pub items: u32,
    pub date: String,
}

impl RecentOrder {
    /// Order total as a number. Strips a leading currency symbol and
    /// thousands separators (`"₹1,250.00"`).
    pub fn total_amount(&self) -> Option<f64> {
        self.total
            .trim()
            .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-' && c != '.')
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
    }
}

impl ListRecord for RecentOrder {
    fn record_id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::text(self.id.as_str())),
            "customer" => Some(FieldValue::text(&self.customer)),
            "status" => Some(FieldValue::text(&self.status)),
            "total" => Some(
                self.total_amount()
                    .map(FieldValue::Number)
                    .unwrap_or_else(|| FieldValue::text(&self.total)),
            ),
            "items" => Some(FieldValue::from(i64::from(self.items))),
            "date" => Some(FieldValue::text(&self.date)),
            _ => None,
        }
    }
}

impl TypedRecord for RecentOrder {
    fn schema() -> RecordSchema {
        RecordSchema::new(
            "order",
            vec![
                SchemaField::text("customer", true),
                SchemaField::text("id", true),
                SchemaField::enumeration(
                    "status",
                    &["pending", "processing", "shipped", "delivered", "cancelled"],
                ),
                SchemaField::number("total"),
                SchemaField::number("items"),
                SchemaField::datetime("date"),
            ],
        )
    }
}
