mod short_link;

#[cfg(test)]
pub use short_link::MockShortLinkRepositoryTrait;
pub use short_link::{ShortLinkRepository, ShortLinkRepositoryTrait};
