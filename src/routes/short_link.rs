use actix_web::web;

use crate::{
    errors::json_error_handler,
    handlers::{redirect_handler, shorten_handler},
    services::ShortLinkServiceTrait,
};

// Configure short link routes. Must be registered after any fixed
// single-segment path, since `/{short_id}` matches every one of them.
pub fn configure_routes<S: ShortLinkServiceTrait + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.route("/shorten", web::post().to(shorten_handler::<S>));
    cfg.route("/{short_id}", web::get().to(redirect_handler::<S>));
}
