use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// 200 with an html body.
pub fn ok_to(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
