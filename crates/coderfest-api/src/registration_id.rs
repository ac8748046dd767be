//! Registration id generation.

use rand::distr::Alphanumeric;
use rand::Rng;

const SUFFIX_LEN: usize = 8;

/// Generate a registration id: `REG-<unix-millis>-<random suffix>`.
///
/// There is no retry-on-collision logic; the timestamp plus an 8-character
/// alphanumeric suffix makes collisions negligible at event scale.
pub fn generate() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("REG-{}-{}", millis, suffix)
}
