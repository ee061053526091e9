use crate::error::BizErrorEnum;
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, Serializer};

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`
    async fn auth_login_post(&self, request: LoginRequest) -> Result<AuthResponse, BizErrorEnum>;

    /// `POST /auth/register`
    async fn auth_register_post(
        &self,
        request: RegisterRequest,
    ) -> Result<AuthResponse, BizErrorEnum>;
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: Secret<String>,
}

/// Body of `POST /auth/register`, same shape as a login.
pub type RegisterRequest = LoginRequest;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    pub username: Option<String>,
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}
