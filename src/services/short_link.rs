// src/services/short_link.rs - Business logic
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use validator::Validate;

use crate::errors::{AppError, SHORT_URL_NOT_FOUND};
use crate::models::{CreateShortLinkDto, ShortLink, ShortLinkResponseDto};
use crate::repositories::ShortLinkRepositoryTrait;
use crate::utils::id_generator;

/// Origin prefixed to every issued short URL
pub const SHORT_URL_BASE: &str = "http://localhost";

type Result<T> = std::result::Result<T, AppError>;

#[async_trait]
pub trait ShortLinkServiceTrait {
    async fn shorten(&self, dto: CreateShortLinkDto) -> Result<ShortLinkResponseDto>;
    async fn resolve(&self, id: &str) -> Result<String>;
}

pub struct ShortLinkService<T: ShortLinkRepositoryTrait> {
    repository: Arc<T>,
}

impl<T: ShortLinkRepositoryTrait> ShortLinkService<T> {
    pub fn new(repository: Arc<T>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<T: ShortLinkRepositoryTrait> ShortLinkServiceTrait for ShortLinkService<T> {
    async fn shorten(&self, dto: CreateShortLinkDto) -> Result<ShortLinkResponseDto> {
        // Rejected requests never reach the store
        dto.validate()?;

        let link = ShortLink::new(id_generator::generate_short_id(), dto.into_url());
        self.repository.save(&link).await?;
        info!("Created short link {} -> {}", link.id, link.target_url);

        Ok(ShortLinkResponseDto {
            short_url: link.short_url(SHORT_URL_BASE),
        })
    }

    async fn resolve(&self, id: &str) -> Result<String> {
        match self.repository.find_by_id(id).await? {
            Some(target) => Ok(target),
            None => {
                debug!("No short link stored under '{}'", id);
                Err(AppError::NotFound(SHORT_URL_NOT_FOUND.to_string()))
            }
        }
    }
}
