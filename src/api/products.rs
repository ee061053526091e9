use crate::api::ApiMessage;
use crate::error::BizErrorEnum;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// `GET /products`, optionally narrowed to one product name.
    async fn products_get(&self, name: Option<&str>) -> Result<Vec<Product>, BizErrorEnum>;

    /// `POST /products`
    async fn products_post(&self, product: &Product) -> Result<ApiMessage, BizErrorEnum>;

    /// `PUT /products/{id}`
    async fn products_id_put(&self, id: i64, product: &Product) -> Result<Product, BizErrorEnum>;

    /// `DELETE /products/{id}`
    async fn products_id_delete(&self, id: i64) -> Result<(), BizErrorEnum>;
}

/// A catalogue entry, prices and tax rates as the api stores them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cgst_rate: Option<f64>,
    #[serde(default)]
    pub sgst_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductList {
    // the api answers `null` when nothing matched
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductEnvelope {
    pub product: Product,
}
