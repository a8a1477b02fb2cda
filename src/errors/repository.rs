use redis::RedisError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The store rejected the command or the connection dropped mid-call
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),

    /// No connection was established at startup
    #[error("Store connection is not available")]
    NotConnected,
}
