use crate::api::LoginRequest;
use crate::request::LoginData;
use secrecy::{ExposeSecret, Secret};

/// What the user typed into the login form. Both fields may be empty.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub identifier: String,
    pub secret: Secret<String>,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            secret: Secret::new(String::new()),
        }
    }
}

impl From<LoginData> for Credentials {
    fn from(value: LoginData) -> Self {
        Self {
            identifier: value.username,
            secret: value.password,
        }
    }
}

/// Values are passed through untouched: no trimming, no validation.
impl From<&Credentials> for LoginRequest {
    fn from(value: &Credentials) -> Self {
        Self {
            username: value.identifier.clone(),
            password: Secret::new(value.secret.expose_secret().clone()),
        }
    }
}
