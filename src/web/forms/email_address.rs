//! Email address syntax rule for form fields.
//!
//! Accepts `local@domain` where:
//!
//! - the local part is a dot-atom of ASCII `atext` or non-ASCII characters, at most 64 bytes
//! - the domain is a dotted hostname (no `[...]` literals), at most 253 bytes
//! - the top-level label is not all digits
//! - the domain is not, and is not under, a special-use name such as `localhost` or `test`
//!
//! Quoted local parts are rejected.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

const INVALID_MESSAGE: &str = "Invalid email address.";

const MAX_ADDRESS_BYTES: usize = 254;
const MAX_LOCAL_BYTES: usize = 64;
const MAX_DOMAIN_BYTES: usize = 253;
const MAX_LABEL_CHARS: usize = 63;

/// Names reserved for special use that never receive mail.
const SPECIAL_USE_DOMAINS: &[&str] = &["arpa", "invalid", "local", "localhost", "onion", "test"];

/// ASCII `atext` plus printable non-ASCII.
const ATOM_CHAR: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-\x{80}-\x{10FFFF}&&[^\s\p{C}]]";

/// Dot-atom: runs of atom characters separated by single dots.
static LOCAL_PART_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{ATOM_CHAR}+(?:\.{ATOM_CHAR}+)*$")).unwrap());

static DOMAIN_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{N}](?:[\p{L}\p{N}\-]*[\p{L}\p{N}])?$").unwrap()
});

/// Fails with "Invalid email address." unless `value` is a deliverable-looking address.
///
/// Empty values are left to the `required` rule.
pub fn email_syntax(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_valid_address(value) {
        return Ok(());
    }
    Err(ValidationError::new("email").with_message(Cow::Borrowed(INVALID_MESSAGE)))
}

fn is_valid_address(value: &str) -> bool {
    if value.len() > MAX_ADDRESS_BYTES {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty() && local.len() <= MAX_LOCAL_BYTES && LOCAL_PART_REGEX.is_match(local)
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_BYTES || domain.starts_with('[') {
        return false;
    }

    let domain = domain.to_lowercase();
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        label.chars().count() <= MAX_LABEL_CHARS && DOMAIN_LABEL_REGEX.is_match(label)
    });
    if !labels_ok {
        return false;
    }

    let tld = labels[labels.len() - 1];
    if tld.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    !SPECIAL_USE_DOMAINS
        .iter()
        .any(|special| domain == *special || domain.ends_with(&format!(".{special}")))
}
