//! Email address splitting and subaddress detection.
//!
//! These helpers are deliberately lenient: they never validate syntax and
//! never fail. Input without an `@` is taken to be a bare domain.

/// Returns the domain portion of an address, case untouched.
///
/// Everything after the first `@` is returned. Input without an `@` is
/// returned unchanged.
///
/// ```
/// use burnlist::normalize_domain;
///
/// assert_eq!(normalize_domain("someone@Example.COM"), "Example.COM");
/// assert_eq!(normalize_domain("a@b@c.com"), "b@c.com");
/// assert_eq!(normalize_domain("example.com"), "example.com");
/// ```
#[must_use]
pub fn normalize_domain(input: &str) -> &str {
    input.split_once('@').map_or(input, |(_, domain)| domain)
}

/// Returns the lowercase lookup key for an address or bare domain.
#[must_use]
pub fn extract_domain(input: &str) -> String {
    normalize_domain(input).to_lowercase()
}

/// Returns the local part of an address (before the first `@`).
///
/// Input without an `@` is returned whole.
#[must_use]
pub fn local_part(input: &str) -> &str {
    input.split_once('@').map_or(input, |(local, _)| local)
}

/// Determines whether an address is subaddressed (`username+tag@domain`).
///
/// A username is required: the address must start with at least one
/// character other than `@`, followed somewhere before the first `@` by a `+`.
/// A `+` in the very first position does not count as a separator, and a `+`
/// in the domain is ignored.
///
/// ```
/// use burnlist::is_subaddressed;
///
/// assert!(is_subaddressed("username+tag@example.com"));
/// assert!(is_subaddressed("username+@example.com"));
/// assert!(!is_subaddressed("+tag@example.com"));
/// assert!(!is_subaddressed("username@sub+domain.example.com"));
/// ```
#[must_use]
pub fn is_subaddressed(address: &str) -> bool {
    local_part(address).chars().skip(1).any(|c| c == '+')
}
