use actix_web::HttpResponse;
use serde::Serialize;

/// Converts the provided body to a `200 OK` JSON response.
pub fn json<T: Serialize, E>(obj: T) -> Result<HttpResponse, E> {
    Ok(HttpResponse::Ok().json(obj))
}
