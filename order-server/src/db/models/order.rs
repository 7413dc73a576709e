//! Order Model

use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderPayload};
use surrealdb::RecordId;
use validator::{Validate, ValidationErrors};

/// Stored order document (没有 id 字段，id 即 RecordId 的 key)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDocument {
    pub dish: String,
    pub price: f64,
    pub server: String,
    pub table: String,
}

impl TryFrom<OrderPayload> for OrderDocument {
    type Error = ValidationErrors;

    /// Validate the populated payload, then take its fields
    fn try_from(payload: OrderPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        let OrderPayload {
            dish: Some(dish),
            price: Some(price),
            server: Some(server),
            table: Some(table),
        } = payload
        else {
            // validate() 已拒绝缺失字段
            return Err(ValidationErrors::new());
        };

        Ok(Self {
            dish,
            price,
            server,
            table,
        })
    }
}

/// Order record as read back from the store
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub id: RecordId,
    pub dish: String,
    pub price: f64,
    pub server: String,
    pub table: String,
}

impl OrderRecord {
    /// Document body without the id
    pub fn document(&self) -> OrderDocument {
        OrderDocument {
            dish: self.dish.clone(),
            price: self.price,
            server: self.server.clone(),
            table: self.table.clone(),
        }
    }
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: record_key(&record.id),
            dish: record.dish,
            price: record.price,
            server: record.server,
            table: record.table,
        }
    }
}

/// 获取纯 ID (去掉 SurrealDB 对 key 的转义括号)
fn record_key(id: &RecordId) -> String {
    id.key()
        .to_string()
        .trim_start_matches(['⟨', '`'])
        .trim_end_matches(['⟩', '`'])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str) -> OrderRecord {
        OrderRecord {
            id: RecordId::from_table_key("orders", key.to_string()),
            dish: "Gazpacho".to_string(),
            price: 7.5,
            server: "ana".to_string(),
            table: "4".to_string(),
        }
    }

    #[test]
    fn test_record_converts_to_api_order() {
        let order: Order = record("0123456789abcdef0123456789abcdef").into();
        assert_eq!(order.id, "0123456789abcdef0123456789abcdef");
        assert_eq!(order.dish, "Gazpacho");
        assert_eq!(order.price, 7.5);
        assert_eq!(order.server, "ana");
        assert_eq!(order.table, "4");
    }

    #[test]
    fn test_numeric_looking_key_is_unescaped() {
        let order: Order = record("12345678901234567890123456789012").into();
        assert_eq!(order.id, "12345678901234567890123456789012");
    }

    #[test]
    fn test_document_from_valid_payload() {
        let doc = OrderDocument::try_from(OrderPayload::new("Croquetas", 9.0, "luis", "12")).unwrap();
        assert_eq!(
            doc,
            OrderDocument {
                dish: "Croquetas".to_string(),
                price: 9.0,
                server: "luis".to_string(),
                table: "12".to_string(),
            }
        );
    }

    #[test]
    fn test_document_from_incomplete_payload_fails() {
        let payload = OrderPayload {
            table: None,
            ..OrderPayload::new("Croquetas", 9.0, "luis", "12")
        };
        let errors = OrderDocument::try_from(payload).unwrap_err();
        assert!(errors.field_errors().contains_key("table"));
    }

    #[test]
    fn test_record_document_strips_id() {
        let rec = record("0123456789abcdef0123456789abcdef");
        assert_eq!(rec.document().dish, "Gazpacho");
        assert_eq!(rec.document().price, 7.5);
    }
}
