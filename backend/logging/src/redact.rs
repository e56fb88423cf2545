//! Log Redaction Layer
//!
//! Scrubs bot tokens and authorization header values from strings prior to logging.

use regex::Regex;
use std::sync::LazyLock;

static BOT_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[MNO][A-Za-z\d_-]{23,27}\.[A-Za-z\d_-]{6}\.[A-Za-z\d_-]{27,}").unwrap()
});
static AUTH_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Bot|Bearer)\s+[a-zA-Z0-9\-\._~+/]+=*").unwrap());

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = AUTH_HEADER_RE.replace_all(input, "$1 [REDACTED_TOKEN]");
    BOT_TOKEN_RE
        .replace_all(&redacted, "[REDACTED_TOKEN]")
        .into_owned()
}
