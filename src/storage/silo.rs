//! Silo key helpers
//!
//! Silo keys are `silo ++ key` with no separator. A silo scan is bounded to
//! the half-open range `[silo, prefix_upper_bound(silo))`.

/// Physical key for `key` inside `silo`
pub fn silo_key(silo: &str, key: &str) -> Vec<u8> {
    let mut physical = Vec::with_capacity(silo.len() + key.len());
    physical.extend_from_slice(silo.as_bytes());
    physical.extend_from_slice(key.as_bytes());
    physical
}

/// Smallest key greater than every key starting with `prefix`.
///
/// Returns `None` when no such bound exists (empty prefix, or all `0xFF`),
/// in which case the range is unbounded above.
pub fn prefix_upper_bound(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut bound = prefix.to_vec();
    while let Some(last) = bound.pop() {
        if last < u8::MAX {
            bound.push(last + 1);
            return Some(bound);
        }
    }
    None
}

/// `key` with the `silo` prefix removed, if it carries it
pub fn strip_silo<'a>(silo: &[u8], key: &'a [u8]) -> Option<&'a [u8]> {
    key.strip_prefix(silo)
}
