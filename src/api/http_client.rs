use crate::api::{
    ApiMessage, AuthApi, AuthResponse, LoginRequest, Product, ProductEnvelope, ProductList,
    ProductsApi, RegisterRequest, SalesApi, SettingsApi,
};
use crate::constant::{
    AUTH_LOGIN_PATH, AUTH_REGISTER_PATH, PRODUCTS_PATH, SALES_PATH, SETTINGS_PATH,
};
use crate::error::BizErrorEnum;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// reqwest backed implementation of every receipt api capability.
#[derive(Debug)]
pub struct HttpApiClient {
    http_client: Client,
    base_url: Url,
}

impl HttpApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BizErrorEnum> {
        // Without a trailing slash `Url::join` would replace the last path segment.
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&base_url).map_err(|e| {
            tracing::error!("Failed to parse url: url={}, e={:?}", base_url, e);
            BizErrorEnum::ParseUrlError
        })?;
        let http_client = Client::builder()
            // timeout is a MUST option for client
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build http client: {:?}", e);
                BizErrorEnum::BuildHttpClientError(e)
            })?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BizErrorEnum> {
        self.base_url.join(path).map_err(|e| {
            tracing::error!("Url failed to join {}: {:?}", path, e);
            BizErrorEnum::JoinUrlError
        })
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, BizErrorEnum> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {:?}", e);
            BizErrorEnum::SendRequestError(e)
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Error bodies are `{"message": ".."}` when the api produced them itself.
        let message = response.json::<ApiMessage>().await.ok().map(|m| m.message);
        tracing::warn!(
            "Receipt api responded with {}: message={:?}",
            status.as_u16(),
            message
        );
        Err(BizErrorEnum::UnexpectedStatus {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BizErrorEnum> {
        self.execute(request).await?.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to decode response body: {:?}", e);
            BizErrorEnum::DecodeResponseError(e)
        })
    }
}

#[async_trait]
impl AuthApi for HttpApiClient {
    #[tracing::instrument(name = "Call auth login", skip(self, request), fields(username = %request.username))]
    async fn auth_login_post(&self, request: LoginRequest) -> Result<AuthResponse, BizErrorEnum> {
        let url = self.endpoint(AUTH_LOGIN_PATH)?;
        self.fetch(self.http_client.post(url).json(&request)).await
    }

    #[tracing::instrument(name = "Call auth register", skip(self, request), fields(username = %request.username))]
    async fn auth_register_post(
        &self,
        request: RegisterRequest,
    ) -> Result<AuthResponse, BizErrorEnum> {
        let url = self.endpoint(AUTH_REGISTER_PATH)?;
        self.fetch(self.http_client.post(url).json(&request)).await
    }
}

#[async_trait]
impl ProductsApi for HttpApiClient {
    async fn products_get(&self, name: Option<&str>) -> Result<Vec<Product>, BizErrorEnum> {
        let url = self.endpoint(PRODUCTS_PATH)?;
        let mut request = self.http_client.get(url);
        if let Some(name) = name {
            request = request.query(&[("name", name)]);
        }
        let list: ProductList = self.fetch(request).await?;
        Ok(list.products.unwrap_or_default())
    }

    async fn products_post(&self, product: &Product) -> Result<ApiMessage, BizErrorEnum> {
        let url = self.endpoint(PRODUCTS_PATH)?;
        self.fetch(self.http_client.post(url).json(product)).await
    }

    async fn products_id_put(&self, id: i64, product: &Product) -> Result<Product, BizErrorEnum> {
        let url = self.endpoint(&format!("{}/{}", PRODUCTS_PATH, id))?;
        let envelope: ProductEnvelope = self.fetch(self.http_client.put(url).json(product)).await?;
        Ok(envelope.product)
    }

    async fn products_id_delete(&self, id: i64) -> Result<(), BizErrorEnum> {
        let url = self.endpoint(&format!("{}/{}", PRODUCTS_PATH, id))?;
        self.execute(self.http_client.delete(url)).await?;
        Ok(())
    }
}

#[async_trait]
impl SalesApi for HttpApiClient {
    async fn sales_get(&self) -> Result<Value, BizErrorEnum> {
        let url = self.endpoint(SALES_PATH)?;
        self.fetch(self.http_client.get(url)).await
    }

    async fn sales_post(&self, sale: &Value) -> Result<Value, BizErrorEnum> {
        let url = self.endpoint(SALES_PATH)?;
        self.fetch(self.http_client.post(url).json(sale)).await
    }

    async fn sales_id_put(&self, id: i64, sale: &Value) -> Result<Value, BizErrorEnum> {
        let url = self.endpoint(&format!("{}/{}", SALES_PATH, id))?;
        self.fetch(self.http_client.put(url).json(sale)).await
    }

    async fn sales_id_delete(&self, id: i64) -> Result<(), BizErrorEnum> {
        let url = self.endpoint(&format!("{}/{}", SALES_PATH, id))?;
        self.execute(self.http_client.delete(url)).await?;
        Ok(())
    }

    async fn sales_id_receipt_get(&self, id: i64) -> Result<Value, BizErrorEnum> {
        let url = self.endpoint(&format!("{}/{}/receipt", SALES_PATH, id))?;
        self.fetch(self.http_client.get(url)).await
    }
}

#[async_trait]
impl SettingsApi for HttpApiClient {
    async fn settings_get(&self) -> Result<Value, BizErrorEnum> {
        let url = self.endpoint(SETTINGS_PATH)?;
        self.fetch(self.http_client.get(url)).await
    }

    async fn settings_put(&self, settings: &Value) -> Result<Value, BizErrorEnum> {
        let url = self.endpoint(SETTINGS_PATH)?;
        self.fetch(self.http_client.put(url).json(settings)).await
    }
}
