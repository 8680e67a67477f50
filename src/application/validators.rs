/// Validates that the input looks like a valid email address.
///
/// This is the shape the signup form has always accepted: no whitespace,
/// exactly one `@`, a non-empty local part, and a domain with an interior
/// dot. Known-loose on purpose (consecutive dots pass); tightening it would
/// strand addresses already stored under the loose rule.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain dot needs at least one character on each side.
    let bytes = domain.as_bytes();
    bytes.len() >= 3 && bytes[1..bytes.len() - 1].contains(&b'.')
}

/// Normalizes a submitted email the way the store expects it: surrounding
/// whitespace trimmed, everything lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
