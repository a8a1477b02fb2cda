use std::sync::Arc;

use actix_web::web;

mod short_link;

pub use short_link::{ShortLinkService, ShortLinkServiceTrait};

use crate::{db::Database, repositories::ShortLinkRepository};

pub type ShortLinkServiceType = ShortLinkService<ShortLinkRepository>;

/// Service Register
pub fn register(db: Database, cfg: &mut web::ServiceConfig) {
    let short_link_repository = ShortLinkRepository::new(db);
    let short_link_service = ShortLinkService::new(Arc::new(short_link_repository));
    cfg.app_data(web::Data::new(short_link_service));
}
