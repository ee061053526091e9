use crate::error::BizErrorEnum;
use async_trait::async_trait;
use serde_json::Value;

/// Sales are not modelled by the api yet, payloads stay opaque.
#[async_trait]
pub trait SalesApi: Send + Sync {
    async fn sales_get(&self) -> Result<Value, BizErrorEnum>;

    async fn sales_post(&self, sale: &Value) -> Result<Value, BizErrorEnum>;

    async fn sales_id_put(&self, id: i64, sale: &Value) -> Result<Value, BizErrorEnum>;

    async fn sales_id_delete(&self, id: i64) -> Result<(), BizErrorEnum>;

    async fn sales_id_receipt_get(&self, id: i64) -> Result<Value, BizErrorEnum>;
}
