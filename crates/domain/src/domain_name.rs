//! Domain name helpers shared by the cache and the resolution engine.

/// Lowercases `domain` and strips trailing dots.
pub fn normalize(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}

/// Returns the apex (parent) domain: `domain` with its leftmost label removed.
///
/// A single-label name has no apex.
pub fn apex_of(domain: &str) -> Option<&str> {
    let (_, parent) = domain.split_once('.')?;
    if parent.is_empty() {
        return None;
    }
    Some(parent)
}
