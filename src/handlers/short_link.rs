use actix_web::{http::header::LOCATION, web, HttpResponse, Responder};
use log::{debug, info};

use crate::{models::CreateShortLinkDto, services::ShortLinkServiceTrait, types::Result};

/// Shorten route handler
pub async fn shorten_handler<S: ShortLinkServiceTrait + 'static>(
    dto: web::Json<CreateShortLinkDto>,
    service: web::Data<S>,
) -> Result<impl Responder> {
    let response = service.shorten(dto.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Redirect route handler
pub async fn redirect_handler<S: ShortLinkServiceTrait + 'static>(
    path: web::Path<String>,
    service: web::Data<S>,
) -> Result<impl Responder> {
    let short_id = path.into_inner();
    debug!("Redirect requested for id: {}", short_id);

    let target = service.resolve(&short_id).await?;

    info!("Redirecting '{}' to '{}'", short_id, target);
    Ok(HttpResponse::Found()
        .insert_header((LOCATION, target))
        .finish())
}
