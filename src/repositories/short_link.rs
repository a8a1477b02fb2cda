// src/repositories/short_link.rs - Data access
use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;

use crate::db::Database;
use crate::errors::RepositoryError;
use crate::models::ShortLink;

type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepositoryTrait: Send + Sync {
    /// Stores the mapping `id -> target_url`
    ///
    /// ### Arguments
    /// * `link` - The link to persist; an existing mapping under the same id is overwritten
    ///
    /// ### Errors
    /// * `RepositoryError::NotConnected` - If no store connection was established
    /// * `RepositoryError::Redis` - If the store rejects the command
    async fn save(&self, link: &ShortLink) -> Result<()>;

    /// Looks up the target URL stored under a short id
    ///
    /// ### Returns
    /// * `Result<Option<String>>` - The target URL, or `None` if the id is unknown
    ///
    /// ### Errors
    /// * `RepositoryError::NotConnected` - If no store connection was established
    /// * `RepositoryError::Redis` - If the store rejects the command
    async fn find_by_id(&self, id: &str) -> Result<Option<String>>;
}

// Implementation backed by the redis connection
pub struct ShortLinkRepository {
    db: Database,
}

impl ShortLinkRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShortLinkRepositoryTrait for ShortLinkRepository {
    async fn save(&self, link: &ShortLink) -> Result<()> {
        let mut conn = self.db.get_connection()?;
        // Plain SET: no expiry, no existence check
        conn.set::<_, _, ()>(&link.id, &link.target_url).await?;
        debug!("Stored short link {}", link.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<String>> {
        let mut conn = self.db.get_connection()?;
        let target: Option<String> = conn.get(id).await?;
        Ok(target)
    }
}
