use crate::api::{AuthApi, AuthResponse, LoginRequest};
use crate::auth::Credentials;
use crate::error::BizErrorEnum;
use crate::telemetry;
use secrecy::Secret;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// How a single login submission ended.
#[derive(Debug)]
pub enum LoginOutcome {
    Succeeded(AuthResponse),
    Failed(BizErrorEnum),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Succeeded(_))
    }
}

/// The login form: two fields of local state and a submit action.
///
/// Field state is written through the setters (one call per edit) and
/// read once per submission by [`LoginView::on_login`].
pub struct LoginView {
    credentials: Credentials,
    auth: Arc<dyn AuthApi>,
}

impl LoginView {
    /// A fresh view with both fields empty.
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self {
            credentials: Credentials::default(),
            auth,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.credentials.identifier
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.credentials.identifier = identifier.into();
    }

    pub fn secret(&self) -> &Secret<String> {
        &self.credentials.secret
    }

    pub fn set_secret(&mut self, secret: Secret<String>) {
        self.credentials.secret = secret;
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Submit the current credentials to the auth api.
    ///
    /// Returns as soon as the call is spawned. The task logs exactly one
    /// success or failure and resolves to the matching [`LoginOutcome`].
    /// Nothing stops a second submission while one is still in flight.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime, since the call is
    /// handed to `tokio::spawn`.
    #[tracing::instrument(
        name = "Submit login",
        skip(self),
        fields(username = %self.credentials.identifier)
    )]
    pub fn on_login(&self) -> JoinHandle<LoginOutcome> {
        tracing::info!("Login button clicked");
        let request = LoginRequest::from(&self.credentials);
        let auth = Arc::clone(&self.auth);
        telemetry::spawn_with_tracing(async move {
            match auth.auth_login_post(request).await {
                Ok(response) => {
                    tracing::info!("Login success: {:?}", response);
                    LoginOutcome::Succeeded(response)
                }
                // No retry and nothing shown to the user, the form stays as it is.
                Err(e) => {
                    tracing::error!("Login failed: {:?}", e);
                    LoginOutcome::Failed(e)
                }
            }
        })
    }

    /// The form as html. The secret is never written back into the page.
    pub fn render(&self) -> String {
        include_str!("login.html").replace(
            "{identifier}",
            &htmlescape::encode_attribute(&self.credentials.identifier),
        )
    }
}
