/// Strips a single leading `*` from a covered name.
/// Only that one character goes; "*.example.com" becomes ".example.com".
pub fn bare_name(covered_name: &str) -> &str {
    covered_name.strip_prefix('*').unwrap_or(covered_name)
}

/// Whether a covered name is a candidate for the requested domain.
///
/// This is plain substring containment of the bare name, not anchored to
/// label boundaries: "example.com" also matches "example.com.evil.org".
pub fn covers(covered_name: &str, requested_name: &str) -> bool {
    requested_name.contains(bare_name(covered_name))
}
