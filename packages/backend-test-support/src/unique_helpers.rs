//! Unique test identities so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("user");
/// let b = unique_str("user");
/// assert_ne!(a, b);
/// assert!(a.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A session subject shaped like the ones the session provider issues.
///
/// ```
/// use backend_test_support::unique_helpers::unique_user_sub;
///
/// assert!(unique_user_sub().starts_with("user|"));
/// ```
pub fn unique_user_sub() -> String {
    format!("user|{}", Ulid::new().to_string().to_lowercase())
}
