use rand::{rng, Rng};

/// Number of random bytes behind every short id
pub const SHORT_ID_BYTES: usize = 4;

/// Generates a short id by hex-encoding random bytes from the thread-local CSPRNG.
///
/// The result is always `SHORT_ID_BYTES * 2` lowercase hex characters. Ids are
/// not checked for uniqueness.
pub fn generate_short_id() -> String {
    let mut bytes = [0u8; SHORT_ID_BYTES];
    rng().fill(&mut bytes);
    hex::encode(bytes)
}
