//! Redaction of credentials in free text before it reaches a log line.

use once_cell::sync::Lazy;
use regex::Regex;

const REPLACEMENT: &str = "[REDACTED]";

/// Redacts values that look like secrets in a string.
///
/// Covers the `X-Api-Key` header, `apikey` query parameters and JSON or
/// `key=value` entries whose key names a password, token or API key.
///
/// ```rust
/// use sonarr_util::redact_sensitive;
///
/// assert_eq!(redact_sensitive("X-Api-Key: 0123abcd"), "X-Api-Key: [REDACTED]");
/// assert_eq!(redact_sensitive("GET /api/v3/tag?apikey=0123abcd"), "GET /api/v3/tag?apikey=[REDACTED]");
/// ```
pub fn redact_sensitive(input: &str) -> String {
    let mut redacted = input.to_string();
    for pattern in redact_patterns().iter() {
        redacted = pattern
            .replace_all(&redacted, |captures: &regex::Captures| {
                let prefix = captures.get(1).map(|m| m.as_str()).unwrap_or("");
                let suffix = captures.get(3).map(|m| m.as_str()).unwrap_or("");
                format!("{prefix}{REPLACEMENT}{suffix}")
            })
            .to_string();
    }
    redacted
}

fn redact_patterns() -> &'static Vec<Regex> {
    static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r"(?i)(x-api-key:\s*)([^\s,]+)()",
            r"(?i)([?&]apikey=)([^&\s]+)()",
            r#"(?i)("(?:apiKey|password|passwordConfirmation|token|accessToken|refreshToken|secret|authToken|botToken|sslCertPassword|proxyPassword)"\s*:\s*")([^"]*)(")"#,
            r"(?i)(\b[A-Z0-9_]*(?:API_KEY|TOKEN|SECRET|PASSWORD)=)([^\s]+)()",
        ]
        .into_iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
    });
    &PATTERNS
}
