//! Session tokens for tests

use std::time::{Duration, SystemTime};

use scorepad::{mint_access_token, SecurityConfig};

/// Full Authorization header value for `sub`.
pub fn bearer_header(sub: &str, sec: &SecurityConfig) -> String {
    let token = mint_access_token(sub, SystemTime::now(), sec).expect("mint token");
    format!("Bearer {token}")
}

/// Token issued two hours ago, past its one hour TTL.
pub fn expired_bearer_header(sub: &str, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
    let token = mint_access_token(sub, issued, sec).expect("mint token");
    format!("Bearer {token}")
}
