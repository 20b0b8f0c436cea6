use serde::{Deserialize, Serialize};

use crate::kind::MediaKind;

/// Effective content-rating restrictions for one requester.
///
/// Read from the admin defaults (optionally merged with a per-user
/// override) at request time and treated as immutable for the duration of
/// that request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentRatingLimits {
    /// Most permissive movie certification the requester may see.
    pub max_movie_rating: Option<String>,
    /// Most permissive TV certification the requester may see.
    pub max_tv_rating: Option<String>,
    /// Block items that carry no certification at all.
    #[serde(default)]
    pub block_unrated: bool,
    /// Block items flagged as adult by the catalog.
    #[serde(default)]
    pub block_adult: bool,
}

impl ContentRatingLimits {
    /// Whether any restriction is configured. When false the filters are
    /// an identity pass and no certification lookups happen.
    pub fn is_active(&self) -> bool {
        self.max_movie_rating.is_some()
            || self.max_tv_rating.is_some()
            || self.block_unrated
            || self.block_adult
    }

    /// Whether any restriction that requires a certification lookup
    /// remains once the adult flag has been handled.
    pub fn rating_checks_active(&self) -> bool {
        self.max_movie_rating.is_some()
            || self.max_tv_rating.is_some()
            || self.block_unrated
    }

    /// The configured ceiling for the given content category.
    pub fn ceiling_for(&self, kind: MediaKind) -> Option<&str> {
        match kind {
            MediaKind::Movie => self.max_movie_rating.as_deref(),
            MediaKind::Tv => self.max_tv_rating.as_deref(),
        }
    }
}

/// Per-user partial override of the admin default limits. `None` fields
/// inherit the default; set fields replace it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRatingOverrides {
    pub max_movie_rating: Option<String>,
    pub max_tv_rating: Option<String>,
    pub block_unrated: Option<bool>,
    pub block_adult: Option<bool>,
}

impl UserRatingOverrides {
    /// Merge these overrides over the admin defaults, field by field.
    pub fn merge_over(&self, defaults: &ContentRatingLimits) -> ContentRatingLimits {
        ContentRatingLimits {
            max_movie_rating: self
                .max_movie_rating
                .clone()
                .or_else(|| defaults.max_movie_rating.clone()),
            max_tv_rating: self
                .max_tv_rating
                .clone()
                .or_else(|| defaults.max_tv_rating.clone()),
            block_unrated: self.block_unrated.unwrap_or(defaults.block_unrated),
            block_adult: self.block_adult.unwrap_or(defaults.block_adult),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_when_nothing_is_set() {
        let limits = ContentRatingLimits::default();
        assert!(!limits.is_active());
        assert!(!limits.rating_checks_active());
    }

    #[test]
    fn adult_only_limits_need_no_rating_checks() {
        let limits = ContentRatingLimits {
            block_adult: true,
            ..Default::default()
        };
        assert!(limits.is_active());
        assert!(!limits.rating_checks_active());
    }

    #[test]
    fn overrides_merge_field_by_field() {
        let defaults = ContentRatingLimits {
            max_movie_rating: Some("R".to_string()),
            max_tv_rating: Some("TV-MA".to_string()),
            block_unrated: false,
            block_adult: true,
        };
        let overrides = UserRatingOverrides {
            max_movie_rating: Some("PG-13".to_string()),
            block_unrated: Some(true),
            ..Default::default()
        };

        let merged = overrides.merge_over(&defaults);
        assert_eq!(merged.max_movie_rating.as_deref(), Some("PG-13"));
        assert_eq!(merged.max_tv_rating.as_deref(), Some("TV-MA"));
        assert!(merged.block_unrated);
        assert!(merged.block_adult);
    }
}
