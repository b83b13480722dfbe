use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct OrderAddress {
    #[serde(alias = "Address")]
    pub address: Option<String>,
    #[serde(alias = "City")]
    pub city: Option<String>,
    #[serde(alias = "State")]
    pub state: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductItem {
    #[serde(alias = "ProductId", alias = "product_id")]
    pub product_id: i32,
    #[serde(alias = "Cost", deserialize_with = "exact_decimal")]
    pub cost: Decimal,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(alias = "OrderNumber", alias = "order_number")]
    pub order_number: i32,
    /// Unset only when the field is absent; `null` or an unparsable date is an error.
    #[serde(
        alias = "OrderDate",
        alias = "order_date",
        deserialize_with = "order_date"
    )]
    pub order_date: Option<NaiveDateTime>,
    #[serde(alias = "CustomerName", alias = "customer_name")]
    pub customer_name: Option<String>,
    #[serde(alias = "CustomerId", alias = "customer_id")]
    pub customer_id: i32,
    #[serde(alias = "ShipTo", alias = "ship_to")]
    pub ship_to: Option<OrderAddress>,
    #[serde(alias = "Items", deserialize_with = "nullable_items")]
    pub items: Vec<ProductItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub message: String,
    pub discount_value: Decimal,
    pub order_total: Decimal,
}

impl OrderResponse {
    pub fn ok(discount_value: Decimal, order_total: Decimal) -> Self {
        Self {
            message: "OK".to_string(),
            discount_value,
            order_total,
        }
    }

    /// Error container: zero amounts with a diagnostic message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            discount_value: Decimal::ZERO,
            order_total: Decimal::ZERO,
        }
    }
}

fn nullable_items<'de, D>(deserializer: D) -> Result<Vec<ProductItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ProductItem>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads the number literal text rather than an `f64`, so no digits are lost.
/// Quoted numbers are rejected as a type mismatch.
fn exact_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    let literal = number.to_string();
    let parsed = if literal.contains(['e', 'E']) {
        Decimal::from_scientific(&literal)
    } else {
        Decimal::from_str_exact(&literal)
    };
    parsed.map_err(|err| de::Error::custom(format!("invalid cost {literal}: {err}")))
}

fn order_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid order date {raw:?}")))
}

fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_camel_and_pascal_case_fields() {
        let order: OrderRequest = serde_json::from_str(
            r#"{"OrderNumber": 7, "customerId": 3, "Items": [{"ProductId": 1, "cost": 12.5}]}"#,
        )
        .unwrap();
        assert_eq!(order.order_number, 7);
        assert_eq!(order.customer_id, 3);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_id, 1);
        assert_eq!(order.items[0].cost, dec!(12.5));
    }

    #[test]
    fn missing_and_null_fields_use_defaults() {
        let order: OrderRequest =
            serde_json::from_str(r#"{"items": null, "shipTo": null, "extra": true}"#).unwrap();
        assert_eq!(order.order_number, 0);
        assert!(order.items.is_empty());
        assert!(order.ship_to.is_none());
        assert!(order.order_date.is_none());
    }

    #[test]
    fn order_date_accepts_iso_forms() {
        let order: OrderRequest =
            serde_json::from_str(r#"{"orderDate": "2024-03-01T10:15:00Z"}"#).unwrap();
        assert_eq!(
            order.order_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_opt(10, 15, 0))
        );

        let order: OrderRequest = serde_json::from_str(r#"{"orderDate": "2024-03-01"}"#).unwrap();
        assert!(order.order_date.is_some());

        let order: OrderRequest =
            serde_json::from_str(r#"{"orderDate": "2024-03-01T10:15:00.250"}"#).unwrap();
        assert!(order.order_date.is_some());
    }

    #[test]
    fn bad_order_date_is_rejected() {
        for body in [
            r#"{"orderDate": "yesterday"}"#,
            r#"{"orderDate": 12345}"#,
            r#"{"orderDate": null}"#,
        ] {
            assert!(serde_json::from_str::<OrderRequest>(body).is_err(), "{body}");
        }
    }

    #[test]
    fn cost_keeps_every_digit() {
        let order: OrderRequest = serde_json::from_str(
            r#"{"items": [{"cost": 1234567890.123456789}, {"cost": 0.1}, {"cost": 25e1}]}"#,
        )
        .unwrap();
        assert_eq!(order.items[0].cost, dec!(1234567890.123456789));
        assert_eq!(order.items[1].cost, dec!(0.1));
        assert_eq!(order.items[2].cost, dec!(250));
    }

    #[test]
    fn quoted_cost_is_rejected() {
        let result = serde_json::from_str::<OrderRequest>(r#"{"items": [{"cost": "12.5"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn cost_type_mismatch_is_rejected() {
        let result = serde_json::from_str::<OrderRequest>(r#"{"items": [{"cost": "cheap"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn response_serializes_camel_case_keys() {
        let value = serde_json::to_value(OrderResponse::ok(dec!(55.00), dec!(495.00))).unwrap();
        assert_eq!(value["message"], "OK");
        assert_eq!(value["discountValue"], 55.0);
        assert_eq!(value["orderTotal"], 495.0);
    }
}
