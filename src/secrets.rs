//! Secret detection for report output.
//!
//! The report is meant to be pasted into bug reports and CI logs, so values
//! of keys that look like credentials can be masked.

/// Replacement shown instead of a secret value.
pub const MASK: &str = "[REDACTED]";

/// Built-in secret patterns.
///
/// These use simple glob-style matching where `*` matches any characters.
pub const SECRET_PATTERNS: &[&str] = &[
    "*_KEY",
    "*_SECRET",
    "*_TOKEN",
    "*_PASSWORD",
    "*_PASSWD",
    "*_CREDENTIAL",
    "*_CREDENTIALS",
    "*_DSN",
    "*DATABASE_URL",
    "*REDIS_URL",
    "AWS_*",
];

/// Check if an environment variable name matches a secret pattern.
///
/// # Example
///
/// ```
/// use envexist::secrets::is_secret;
///
/// assert!(is_secret("PAYMENT_API_KEY"));
/// assert!(is_secret("app_database_url"));
/// assert!(!is_secret("APP_PORT"));
/// ```
pub fn is_secret(name: &str) -> bool {
    let name = name.to_uppercase();
    SECRET_PATTERNS
        .iter()
        .any(|pattern| matches_pattern(&name, pattern))
}

/// Simple glob-style pattern matching (* matches any characters).
fn matches_pattern(name: &str, pattern: &str) -> bool {
    if pattern.starts_with('*') && pattern.ends_with('*') && pattern.len() >= 2 {
        name.contains(&pattern[1..pattern.len() - 1])
    } else if let Some(suffix) = pattern.strip_prefix('*') {
        name.ends_with(suffix)
    } else if let Some(prefix) = pattern.strip_suffix('*') {
        name.starts_with(prefix)
    } else {
        name == pattern
    }
}
