//! Cadastral number normalization.
//!
//! The registry accepts detailed-object ids in two historical formats: the
//! full cadastral number with zero-padded quarters (`77:17:0000000:11471`)
//! and the compact form without padding (`77:17:0:11471`). Lookups by id
//! expect the compact form.

/// Strips leading zeros from every colon-separated segment of a cadastral id.
///
/// The final character of each segment is always kept, so an all-zero
/// segment collapses to a single `0`. Empty segments stay empty.
///
/// # Examples
///
/// ```
/// use rosreestr_core::normalize_cadastral_id;
///
/// assert_eq!(normalize_cadastral_id("77:17:0000000:11471"), "77:17:0:11471");
/// assert_eq!(normalize_cadastral_id("71::000112278"), "71::112278");
/// assert_eq!(normalize_cadastral_id("177_385900460001"), "177_385900460001");
/// ```
#[must_use]
pub fn normalize_cadastral_id(cadastral_id: &str) -> String {
    cadastral_id
        .split(':')
        .map(normalize_segment)
        .collect::<Vec<_>>()
        .join(":")
}

fn normalize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next_back() {
        Some(last) => {
            let mut normalized = chars.as_str().trim_start_matches('0').to_string();
            normalized.push(last);
            normalized
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_quarter_collapses() {
        assert_eq!(normalize_cadastral_id("77:17:0000000:11471"), "77:17:0:11471");
        assert_eq!(normalize_cadastral_id("71:00:000000:112278"), "71:0:0:112278");
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(normalize_cadastral_id("77:01:011471:0010"), "77:1:11471:10");
    }

    #[test]
    fn test_empty_segment_preserved() {
        assert_eq!(normalize_cadastral_id("71::000112278"), "71::112278");
        assert_eq!(normalize_cadastral_id(":05:"), ":5:");
    }

    #[test]
    fn test_already_compact_unchanged() {
        assert_eq!(normalize_cadastral_id("77:17:0:11471"), "77:17:0:11471");
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(normalize_cadastral_id("0"), "0");
        assert_eq!(normalize_cadastral_id("000"), "0");
        assert_eq!(normalize_cadastral_id(""), "");
    }
}
