use secrecy::Secret;
use serde::Deserialize;

/// Form fields posted by the login page.
#[derive(Deserialize)]
pub struct LoginData {
    pub username: String,
    pub password: Secret<String>,
}
