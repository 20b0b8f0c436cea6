//! Static rating hierarchies and the unrated sentinel set.
//!
//! Position encodes restrictiveness: lower index = more permissive. The
//! tables are fixed at compile time; nothing mutates them at runtime.

use curator_model::MediaKind;

/// US movie certifications, most permissive first.
pub const MOVIE_RATING_ORDER: &[&str] = &["G", "PG", "PG-13", "R", "NC-17"];

/// US TV content ratings, most permissive first.
pub const TV_RATING_ORDER: &[&str] =
    &["TV-Y", "TV-Y7", "TV-G", "TV-PG", "TV-14", "TV-MA"];

/// Values that mean "no rating assigned". Distinct from a rating string
/// the hierarchy simply does not know. `NR` lives here and only here; it
/// is never part of the ordered hierarchies, so a ceiling of `NR` is an
/// unrecognized ceiling.
pub const UNRATED_VALUES: &[&str] = &["NR", "UR", "Unrated", "Not Rated", ""];

/// The ordered hierarchy for a content category.
pub fn rating_order(kind: MediaKind) -> &'static [&'static str] {
    match kind {
        MediaKind::Movie => MOVIE_RATING_ORDER,
        MediaKind::Tv => TV_RATING_ORDER,
    }
}

/// Hierarchy position of a rating label. Case-sensitive exact match; a
/// miss means the label is unknown to the hierarchy, not that it is
/// unrated.
pub fn rating_index(kind: MediaKind, label: &str) -> Option<usize> {
    rating_order(kind).iter().position(|entry| *entry == label)
}

/// Whether a certification value is an explicit "no rating" sentinel.
pub fn is_unrated(label: &str) -> bool {
    UNRATED_VALUES.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchies_have_no_duplicate_labels() {
        for order in [MOVIE_RATING_ORDER, TV_RATING_ORDER] {
            for (i, label) in order.iter().enumerate() {
                assert_eq!(
                    order.iter().position(|entry| entry == label),
                    Some(i),
                    "duplicate label {label}"
                );
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(rating_index(MediaKind::Movie, "PG-13"), Some(2));
        assert_eq!(rating_index(MediaKind::Movie, "pg-13"), None);
    }

    #[test]
    fn empty_string_is_an_unrated_sentinel() {
        assert!(is_unrated(""));
        assert!(is_unrated("NR"));
        assert!(!is_unrated("G"));
    }

    #[test]
    fn nr_is_not_in_either_hierarchy() {
        assert_eq!(rating_index(MediaKind::Movie, "NR"), None);
        assert_eq!(rating_index(MediaKind::Tv, "NR"), None);
    }
}
