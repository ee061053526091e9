use crate::error::BizErrorEnum;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait SettingsApi: Send + Sync {
    async fn settings_get(&self) -> Result<Value, BizErrorEnum>;

    async fn settings_put(&self, settings: &Value) -> Result<Value, BizErrorEnum>;
}
