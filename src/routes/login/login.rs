use crate::api::ApiClients;
use crate::auth::Credentials;
use crate::request::LoginData;
use crate::utils;
use crate::views::LoginView;
use actix_web::{web, HttpResponse};

/// Forward the submitted form to the auth api and show the form again.
///
/// The api call is not awaited: its outcome only reaches the logs.
/// The page keeps the typed username but not the password, which is never
/// written back into html, so the password box comes back empty.
#[tracing::instrument(
    name = "Login",
    skip(form, api),
    fields(username = %form.username)
)]
pub async fn login(form: web::Form<LoginData>, api: web::Data<ApiClients>) -> HttpResponse {
    let credentials: Credentials = form.into_inner().into();
    let mut view = LoginView::new(api.auth());
    view.set_identifier(credentials.identifier);
    view.set_secret(credentials.secret);

    // dropping the handle detaches the task, it still runs to completion
    let _ = view.on_login();

    utils::ok_to(view.render())
}
