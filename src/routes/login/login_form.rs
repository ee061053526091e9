use crate::api::ApiClients;
use crate::utils;
use crate::views::LoginView;
use actix_web::{web, HttpResponse};

/// The shell's only page: a freshly mounted login view.
#[tracing::instrument(name = "Get login page", skip(api))]
pub async fn login_form(api: web::Data<ApiClients>) -> HttpResponse {
    let view = LoginView::new(api.auth());
    utils::ok_to(view.render())
}
