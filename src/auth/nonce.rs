//! Anti-forgery nonces for the REST API.
//!
//! A nonce is an HMAC over the current time tick, the action name and the
//! user id. A tick lasts half the configured lifetime and a nonce verifies
//! during its own tick and the next one.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Action every REST request nonce is bound to
pub const REST_ACTION: &str = "wp_rest";

/// Request header carrying the nonce
pub const NONCE_HEADER: &str = "x-wp-nonce";

/// How old a valid nonce is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceAge {
    /// Generated during the current tick
    Fresh,
    /// Generated during the previous tick
    Aging,
}

/// Time tick for `now` (Unix seconds) given the nonce lifetime.
pub fn tick(now: i64, lifetime_secs: u64) -> i64 {
    let half = (lifetime_secs / 2).max(1) as i64;
    // ceil(now / half) for non-negative timestamps
    (now + half - 1).div_euclid(half)
}

fn nonce_for_tick(secret: &str, tick: i64, action: &str, user_id: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(format!("{}|{}|{}", tick, action, user_id).as_bytes());
    let digest = hex::encode(mac.finalize().into_bytes());
    let end = digest.len() - 2;
    digest[end - 10..end].to_string()
}

/// Create a nonce for `user_id` and `action` at time `now`.
pub fn create_nonce(
    secret: &str,
    action: &str,
    user_id: &str,
    now: i64,
    lifetime_secs: u64,
) -> String {
    nonce_for_tick(secret, tick(now, lifetime_secs), action, user_id)
}

/// Check a nonce; `None` when it is invalid or expired.
pub fn verify_nonce(
    secret: &str,
    nonce: &str,
    action: &str,
    user_id: &str,
    now: i64,
    lifetime_secs: u64,
) -> Option<NonceAge> {
    if nonce.is_empty() {
        return None;
    }
    let current = tick(now, lifetime_secs);
    if nonce_for_tick(secret, current, action, user_id) == nonce {
        return Some(NonceAge::Fresh);
    }
    if nonce_for_tick(secret, current - 1, action, user_id) == nonce {
        return Some(NonceAge::Aging);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "nonce-secret";
    const DAY: u64 = 86400;

    #[test]
    fn test_nonce_is_ten_hex_chars() {
        let nonce = create_nonce(SECRET, REST_ACTION, "1", 1_700_000_000, DAY);
        assert_eq!(nonce.len(), 10);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_nonce_ages_then_expires() {
        let now = 1_700_000_000;
        let nonce = create_nonce(SECRET, REST_ACTION, "1", now, DAY);

        assert_eq!(
            verify_nonce(SECRET, &nonce, REST_ACTION, "1", now, DAY),
            Some(NonceAge::Fresh)
        );
        let half_day_later = now + (DAY / 2) as i64;
        assert_eq!(
            verify_nonce(SECRET, &nonce, REST_ACTION, "1", half_day_later, DAY),
            Some(NonceAge::Aging)
        );
        let day_later = now + DAY as i64;
        assert_eq!(
            verify_nonce(SECRET, &nonce, REST_ACTION, "1", day_later, DAY),
            None
        );
    }

    #[test]
    fn test_nonce_bound_to_user_and_action() {
        let now = 1_700_000_000;
        let nonce = create_nonce(SECRET, REST_ACTION, "1", now, DAY);

        assert!(verify_nonce(SECRET, &nonce, REST_ACTION, "2", now, DAY).is_none());
        assert!(verify_nonce(SECRET, &nonce, "other_action", "1", now, DAY).is_none());
        assert!(verify_nonce("another-secret", &nonce, REST_ACTION, "1", now, DAY).is_none());
        assert!(verify_nonce(SECRET, "", REST_ACTION, "1", now, DAY).is_none());
    }
}
